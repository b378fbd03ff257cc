use crate::config::messages;

/// What the gallery container currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GalleryContent {
    /// Listing request still in flight.
    #[default]
    Loading,
    /// Thumbnail URLs in listing order (may be empty if every item was filtered out).
    Photos(Vec<String>),
    /// The listing had no items at all.
    NoPhotos,
    /// The listing request failed.
    LoadFailed,
}

impl GalleryContent {
    /// Text shown instead of thumbnails, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(messages::LOADING),
            Self::Photos(_) => None,
            Self::NoPhotos => Some(messages::NO_PHOTOS),
            Self::LoadFailed => Some(messages::LOAD_FAILED),
        }
    }

    /// Image URLs to register with the lightbox.
    pub fn sources(&self) -> &[String] {
        match self {
            Self::Photos(urls) => urls,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(GalleryContent::Loading.message(), Some("Loading photos..."));
        assert_eq!(
            GalleryContent::NoPhotos.message(),
            Some("No photos found in the gallery.")
        );
        assert_eq!(
            GalleryContent::LoadFailed.message(),
            Some("Sorry, there was an error loading the photos.")
        );
        assert_eq!(GalleryContent::Photos(vec![]).message(), None);
    }

    #[test]
    fn test_sources_only_for_photos() {
        let photos = GalleryContent::Photos(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(photos.sources(), ["a", "b"]);
        assert!(GalleryContent::LoadFailed.sources().is_empty());
    }
}

//! Object listing: URL construction, photo filtering and result mapping.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{STORAGE_API_BASE, STORAGE_PUBLIC_BASE};
use crate::core::error::FetchError;
use crate::models::{GalleryContent, ObjectListing, StorageObject};

/// Object names the gallery renders (matched case-insensitively).
static IMAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpe?g|png|gif|webp)$").expect("valid image name regex"));

/// Listing endpoint for every object under `prefix` in `bucket`.
///
/// The prefix is passed through verbatim; folder prefixes are plain
/// path segments.
pub fn listing_url(bucket: &str, prefix: &str) -> String {
    format!("{}/b/{}/o?prefix={}", STORAGE_API_BASE, bucket, prefix)
}

/// Public URL of an object (bucket must allow unauthenticated reads).
pub fn public_url(bucket: &str, name: &str) -> String {
    format!("{}/{}/{}", STORAGE_PUBLIC_BASE, bucket, name)
}

/// Check if an object name has an image extension.
pub fn is_image_name(name: &str) -> bool {
    IMAGE_NAME.is_match(name)
}

impl StorageObject {
    /// A non-empty image object. Zero-byte entries are folder placeholders.
    pub fn is_photo(&self) -> bool {
        self.size > 0 && is_image_name(&self.name)
    }
}

/// Public URLs of all photos in the listing, in response order.
pub fn photo_urls(listing: &ObjectListing, bucket: &str) -> Vec<String> {
    listing
        .items()
        .iter()
        .filter(|item| item.is_photo())
        .map(|item| public_url(bucket, &item.name))
        .collect()
}

/// Map the outcome of the listing request to what the gallery shows.
pub fn gallery_content(result: &Result<ObjectListing, FetchError>, bucket: &str) -> GalleryContent {
    match result {
        Ok(listing) if listing.items().is_empty() => GalleryContent::NoPhotos,
        Ok(listing) => GalleryContent::Photos(photo_urls(listing, bucket)),
        Err(_) => GalleryContent::LoadFailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(name: &str, size: u64) -> StorageObject {
        StorageObject {
            name: name.to_string(),
            size,
        }
    }

    fn listing(items: Vec<StorageObject>) -> ObjectListing {
        ObjectListing { items: Some(items) }
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(
            listing_url("my-bucket", "photos/"),
            "https://storage.googleapis.com/storage/v1/b/my-bucket/o?prefix=photos/"
        );
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            public_url("my-bucket", "photos/a.jpg"),
            "https://storage.googleapis.com/my-bucket/photos/a.jpg"
        );
    }

    #[test]
    fn test_image_extensions() {
        for name in [
            "a.jpg", "a.jpeg", "a.png", "a.gif", "a.webp", "A.JPG", "b.JpEg", "dir/c.WebP",
        ] {
            assert!(is_image_name(name), "{name} should be an image");
        }
        for name in ["a.tiff", "a.jpg.txt", "jpg", "photos/", "a.pngx", "a_png"] {
            assert!(!is_image_name(name), "{name} should not be an image");
        }
    }

    #[test]
    fn test_folder_placeholder_rejected() {
        assert!(!object("photos/", 0).is_photo());
        assert!(!object("photos/empty.jpg", 0).is_photo());
        assert!(!object("photos/notes.txt", 120).is_photo());
        assert!(object("photos/kitchen.jpg", 120).is_photo());
    }

    #[test]
    fn test_photo_urls_preserve_order() {
        let listing = listing(vec![
            object("photos/c.png", 3),
            object("photos/a.jpg", 1),
            object("photos/b.gif", 2),
        ]);
        assert_eq!(
            photo_urls(&listing, "bkt"),
            vec![
                "https://storage.googleapis.com/bkt/photos/c.png",
                "https://storage.googleapis.com/bkt/photos/a.jpg",
                "https://storage.googleapis.com/bkt/photos/b.gif",
            ]
        );
    }

    #[test]
    fn test_photo_urls_filter_mixed_listing() {
        let listing = listing(vec![
            object("photos/", 0),
            object("photos/a.jpg", 10),
            object("photos/readme.md", 10),
            object("photos/b.webp", 10),
            object("photos/zero.png", 0),
        ]);
        let urls = photo_urls(&listing, "bkt");
        assert_eq!(urls.len(), 2);
        assert!(urls[0].ends_with("photos/a.jpg"));
        assert!(urls[1].ends_with("photos/b.webp"));
        assert!(!urls.iter().any(|u| u.ends_with("readme.md") || u.ends_with("zero.png")));
    }

    #[test]
    fn test_gallery_content_empty_items() {
        let empty = Ok(listing(vec![]));
        assert_eq!(gallery_content(&empty, "bkt"), GalleryContent::NoPhotos);

        let absent = Ok(ObjectListing { items: None });
        assert_eq!(gallery_content(&absent, "bkt"), GalleryContent::NoPhotos);
    }

    #[test]
    fn test_gallery_content_error() {
        let failed = Err(FetchError::NetworkError("offline".to_string()));
        assert_eq!(gallery_content(&failed, "bkt"), GalleryContent::LoadFailed);

        // A JSON error body (e.g. missing bucket) is still a failure, not "no photos".
        let not_found = Err(FetchError::HttpError(404));
        assert_eq!(gallery_content(&not_found, "bkt"), GalleryContent::LoadFailed);

        let bad_json = Err(FetchError::JsonParseError("expected value".to_string()));
        assert_eq!(gallery_content(&bad_json, "bkt"), GalleryContent::LoadFailed);
    }

    #[test]
    fn test_gallery_content_all_filtered() {
        // Items present but none qualify: no thumbnails, no message.
        let only_folder = Ok(listing(vec![object("photos/", 0)]));
        let content = gallery_content(&only_folder, "bkt");
        assert_eq!(content, GalleryContent::Photos(vec![]));
        assert_eq!(content.message(), None);
    }

    #[test]
    fn test_gallery_content_photos() {
        let ok = Ok(listing(vec![object("photos/", 0), object("photos/a.jpg", 5)]));
        assert_eq!(
            gallery_content(&ok, "bkt"),
            GalleryContent::Photos(vec![
                "https://storage.googleapis.com/bkt/photos/a.jpg".to_string()
            ])
        );
    }
}

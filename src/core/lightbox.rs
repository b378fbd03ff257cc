//! Lightbox navigation state.
//!
//! [`Lightbox`] owns the ordered image list, the current position and the
//! modal visibility. It has no DOM access; components render from it and
//! feed it events.

/// A navigation request coming from a key or a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Next,
    Prev,
    Close,
}

impl LightboxAction {
    /// Map a `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Modal image viewer with wraparound navigation.
///
/// Invariant: `current`, when set, is a valid index into `sources`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lightbox {
    sources: Vec<String>,
    current: Option<usize>,
    image: Option<String>,
    visible: bool,
}

impl Lightbox {
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    /// Replace the image list. The current position is forgotten.
    pub fn set_sources(&mut self, sources: Vec<String>) {
        self.sources = sources;
        self.current = None;
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// URL displayed in the modal image.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show `src` and reveal the modal.
    ///
    /// The position is the first entry equal to `src`. Returns `false` when
    /// `src` is not listed; the image is still shown but there is no
    /// position to navigate from, so next/prev do nothing until a listed
    /// image is opened.
    pub fn open(&mut self, src: &str) -> bool {
        self.current = self.sources.iter().position(|s| s == src);
        self.image = Some(src.to_string());
        self.visible = true;
        self.current.is_some()
    }

    /// Hide the modal. The position is kept.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Jump to `index`, wrapping in both directions.
    pub fn show_image(&mut self, index: isize) {
        let len = self.sources.len();
        if len == 0 {
            return;
        }
        let wrapped = index.rem_euclid(len as isize) as usize;
        self.current = Some(wrapped);
        self.image = Some(self.sources[wrapped].clone());
    }

    pub fn next(&mut self) {
        if let Some(i) = self.current {
            self.show_image(i as isize + 1);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.current {
            self.show_image(i as isize - 1);
        }
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Next => self.next(),
            LightboxAction::Prev => self.prev(),
            LightboxAction::Close => self.close(),
        }
    }

    /// Handle a key press. Keys are ignored while the modal is hidden.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.visible {
            return false;
        }
        match LightboxAction::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }
}

//! Gallery lightbox overlay.

use super::{DomElement, VISIBLE_CLASS};

/// Overlay showing a larger copy of a clicked gallery thumbnail.
#[derive(Debug, Clone)]
pub struct Lightbox<E> {
    overlay: E,
    image: E,
    thumbnails: Vec<E>,
}

impl<E: DomElement> Lightbox<E> {
    /// Bind the behaviour. Returns `None` if the overlay or its image is missing.
    ///
    /// An empty thumbnail list still binds; the overlay just never opens.
    pub fn bind(overlay: Option<E>, image: Option<E>, thumbnails: Vec<E>) -> Option<Self> {
        Some(Self {
            overlay: overlay?,
            image: image?,
            thumbnails,
        })
    }

    pub fn overlay(&self) -> &E {
        &self.overlay
    }

    pub fn thumbnails(&self) -> &[E] {
        &self.thumbnails
    }

    pub fn is_open(&self) -> bool {
        self.overlay.has_class(VISIBLE_CLASS)
    }

    /// Show the thumbnail at `index`. Returns `false` for an unknown index.
    pub fn open(&self, index: usize) -> bool {
        let Some(thumb) = self.thumbnails.get(index) else {
            return false;
        };

        if let Some(src) = thumb.attr("src") {
            self.image.set_attr("src", &src);
        }
        self.overlay.add_class(VISIBLE_CLASS);
        true
    }

    /// Hide the overlay (a click anywhere on it).
    pub fn close(&self) {
        self.overlay.remove_class(VISIBLE_CLASS);
    }
}

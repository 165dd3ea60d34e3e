//! Page behaviours: mobile navigation toggle and gallery lightbox.
//!
//! The behaviour logic is written against [`DomElement`] so it can run
//! against real browser elements (see the `web` feature) or plain in-memory
//! stand-ins in tests. Each behaviour binds only when all of its elements
//! are present; otherwise nothing is attached.

mod lightbox;
mod nav;

#[cfg(feature = "web")]
mod web;

pub use lightbox::Lightbox;
pub use nav::NavToggle;

#[cfg(feature = "web")]
pub use web::start;

/// Hamburger control.
pub const NAV_TOGGLE_SELECTOR: &str = ".hamburger";
/// Navigation list shown/hidden by the hamburger.
pub const NAV_LIST_SELECTOR: &str = ".nav-links";
/// Full-screen overlay.
pub const LIGHTBOX_SELECTOR: &str = "#lightbox";
/// Image inside the overlay.
pub const LIGHTBOX_IMAGE_SELECTOR: &str = "#lightbox-img";
/// Clickable gallery thumbnails.
pub const THUMBNAIL_SELECTOR: &str = ".gallery img";

/// State class on the navigation list and the lightbox overlay.
pub const VISIBLE_CLASS: &str = "visible";
/// State class on the hamburger control.
pub const ACTIVE_CLASS: &str = "active";

/// The slice of the DOM element API the behaviours need.
pub trait DomElement {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Flip `class`, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::{BTreeSet, HashMap};
    use std::rc::Rc;

    use super::DomElement;

    #[derive(Debug, Default)]
    struct ElementState {
        classes: BTreeSet<String>,
        attrs: HashMap<String, String>,
    }

    /// In-memory element; clones share state like DOM references do.
    #[derive(Debug, Clone, Default)]
    pub struct FakeElement(Rc<RefCell<ElementState>>);

    impl FakeElement {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_attr(name: &str, value: &str) -> Self {
            let el = Self::new();
            el.set_attr(name, value);
            el
        }
    }

    impl DomElement for FakeElement {
        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().classes.contains(class)
        }

        fn add_class(&self, class: &str) {
            self.0.borrow_mut().classes.insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().classes.remove(class);
        }

        fn attr(&self, name: &str) -> Option<String> {
            self.0.borrow().attrs.get(name).cloned()
        }

        fn set_attr(&self, name: &str, value: &str) {
            self.0
                .borrow_mut()
                .attrs
                .insert(name.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_default_toggle_class() {
        let el = FakeElement::new();
        assert!(el.toggle_class("open"));
        assert!(el.has_class("open"));
        assert!(!el.toggle_class("open"));
        assert!(!el.has_class("open"));
    }
}

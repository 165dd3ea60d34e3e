//! Mobile navigation toggle.

use super::{DomElement, ACTIVE_CLASS, VISIBLE_CLASS};

/// Hamburger control bound to the navigation list it reveals.
#[derive(Debug, Clone)]
pub struct NavToggle<E> {
    toggle: E,
    list: E,
}

impl<E: DomElement> NavToggle<E> {
    /// Bind the behaviour. Returns `None` if either element is missing.
    pub fn bind(toggle: Option<E>, list: Option<E>) -> Option<Self> {
        Some(Self {
            toggle: toggle?,
            list: list?,
        })
    }

    /// The element that receives clicks.
    pub fn toggle(&self) -> &E {
        &self.toggle
    }

    /// Handle a click on the hamburger. Returns whether the list is now shown.
    pub fn click(&self) -> bool {
        self.toggle.toggle_class(ACTIVE_CLASS);
        self.list.toggle_class(VISIBLE_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::FakeElement;

    #[test]
    fn test_bind_requires_both_elements() {
        assert!(NavToggle::bind(Some(FakeElement::new()), None).is_none());
        assert!(NavToggle::<FakeElement>::bind(None, Some(FakeElement::new())).is_none());
        assert!(NavToggle::<FakeElement>::bind(None, None).is_none());
    }

    #[test]
    fn test_click_toggles_both_classes() {
        let hamburger = FakeElement::new();
        let list = FakeElement::new();
        let nav = NavToggle::bind(Some(hamburger.clone()), Some(list.clone())).unwrap();

        assert!(nav.click());
        assert!(list.has_class(VISIBLE_CLASS));
        assert!(hamburger.has_class(ACTIVE_CLASS));

        assert!(!nav.click());
        assert!(!list.has_class(VISIBLE_CLASS));
        assert!(!hamburger.has_class(ACTIVE_CLASS));

        assert!(nav.click());
        assert!(list.has_class(VISIBLE_CLASS));
        assert!(hamburger.has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_click_leaves_other_classes() {
        let hamburger = FakeElement::new();
        hamburger.add_class("hamburger");
        let list = FakeElement::new();
        list.add_class("nav-links");
        let nav = NavToggle::bind(Some(hamburger.clone()), Some(list.clone())).unwrap();

        nav.click();
        nav.click();
        assert!(hamburger.has_class("hamburger"));
        assert!(list.has_class("nav-links"));
    }
}

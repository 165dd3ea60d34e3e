//! Browser bindings for the page behaviours.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::{
    DomElement, Lightbox, NavToggle, LIGHTBOX_IMAGE_SELECTOR, LIGHTBOX_SELECTOR,
    NAV_LIST_SELECTOR, NAV_TOGGLE_SELECTOR, THUMBNAIL_SELECTOR,
};

impl DomElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }
}

/// Wire both behaviours once the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    attach_nav(&document);
    attach_lightbox(&document);
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register a click listener for the lifetime of the page.
fn on_click<F>(target: &Element, handler: F)
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(handler);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn attach_nav(document: &Document) {
    let Some(nav) = NavToggle::bind(
        query(document, NAV_TOGGLE_SELECTOR),
        query(document, NAV_LIST_SELECTOR),
    ) else {
        return;
    };

    let target = nav.toggle().clone();
    on_click(&target, move || {
        nav.click();
    });
}

fn attach_lightbox(document: &Document) {
    let Some(lightbox) = Lightbox::bind(
        query(document, LIGHTBOX_SELECTOR),
        query(document, LIGHTBOX_IMAGE_SELECTOR),
        query_all(document, THUMBNAIL_SELECTOR),
    ) else {
        return;
    };
    let lightbox = Rc::new(lightbox);

    for (index, thumb) in lightbox.thumbnails().iter().enumerate() {
        let lightbox = Rc::clone(&lightbox);
        on_click(thumb, move || {
            lightbox.open(index);
        });
    }

    let overlay = lightbox.overlay().clone();
    on_click(&overlay, move || lightbox.close());
}

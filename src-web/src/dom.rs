//! `ModalTree` over the browser DOM.

use hashmodal_core::ModalTree;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement};

/// A document handle; lookups go through `getElementById`.
#[derive(Debug, Clone)]
pub struct DomTree {
    document: Document,
}

impl DomTree {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if running in a browser.
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|window| window.document()).map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ModalTree for DomTree {
    type Element = Element;

    fn find(&self, key: &str) -> Option<Element> {
        self.document.get_element_by_id(key)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&mut self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            log::debug!("classList.add({class:?}) rejected: {e:?}");
        }
    }

    fn remove_class(&mut self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().remove_1(class) {
            log::debug!("classList.remove({class:?}) rejected: {e:?}");
        }
    }

    fn reset_first_form(&mut self, element: &Element) -> bool {
        match element.query_selector("form") {
            Ok(Some(form)) => match form.dyn_into::<HtmlFormElement>() {
                Ok(form) => {
                    form.reset();
                    true
                }
                Err(_) => false,
            },
            Ok(None) => false,
            Err(e) => {
                log::debug!("form lookup failed: {e:?}");
                false
            }
        }
    }
}

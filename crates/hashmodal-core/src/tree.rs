//! UI tree seam.
//!
//! [`ModalTree`] is the handful of operations the controller needs from a
//! document. The browser crate implements it over the DOM; [`MemoryTree`]
//! is a synthetic tree for tests and non-browser hosts.

use std::collections::{BTreeMap, BTreeSet};

/// Access to the elements a controller manipulates.
///
/// Every mutation applies to an element obtained from [`ModalTree::find`],
/// so a missing key never reaches the mutating methods.
pub trait ModalTree {
    /// Handle to a located element.
    type Element;

    /// Element whose id equals `key`, if any.
    fn find(&self, key: &str) -> Option<Self::Element>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Add `class`. Adding a class already present is a no-op.
    fn add_class(&mut self, element: &Self::Element, class: &str);

    /// Remove `class`. Removing an absent class is a no-op.
    fn remove_class(&mut self, element: &Self::Element, class: &str);

    /// Reset the first form nested in `element` to its default values.
    /// Returns whether a form was found.
    fn reset_first_form(&mut self, element: &Self::Element) -> bool;
}

/// A form with named fields and their declared defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    defaults: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
    resets: usize,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field; its current value starts at the default.
    pub fn with_field(mut self, name: &str, default: &str) -> Self {
        self.defaults.insert(name.to_string(), default.to_string());
        self.values.insert(name.to_string(), default.to_string());
        self
    }

    /// Simulate user input. Unknown fields are ignored.
    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.to_string();
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_at_defaults(&self) -> bool {
        self.values == self.defaults
    }

    /// Number of times the form has been reset.
    pub fn reset_count(&self) -> usize {
        self.resets
    }

    pub fn reset(&mut self) {
        self.values.clone_from(&self.defaults);
        self.resets += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MemoryElement {
    classes: BTreeSet<String>,
    forms: Vec<MemoryForm>,
}

/// In-memory document keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    elements: BTreeMap<String, MemoryElement>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with no classes. Replaces any element with the same key.
    pub fn with_element(mut self, key: &str) -> Self {
        self.elements.insert(key.to_string(), MemoryElement::default());
        self
    }

    /// Add an element that already carries `classes`.
    pub fn with_classes(mut self, key: &str, classes: &[&str]) -> Self {
        let element = MemoryElement {
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            forms: Vec::new(),
        };
        self.elements.insert(key.to_string(), element);
        self
    }

    /// Nest `form` in the element `key`, creating the element if needed.
    /// Forms keep document order; only the first is reset on show.
    pub fn with_form(mut self, key: &str, form: MemoryForm) -> Self {
        self.elements.entry(key.to_string()).or_default().forms.push(form);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    /// Classes of `key` in sorted order, or `None` if the element is missing.
    pub fn classes(&self, key: &str) -> Option<Vec<&str>> {
        self.elements.get(key).map(|e| e.classes.iter().map(String::as_str).collect())
    }

    /// First form nested in `key`.
    pub fn form(&self, key: &str) -> Option<&MemoryForm> {
        self.forms(key).first()
    }

    pub fn form_mut(&mut self, key: &str) -> Option<&mut MemoryForm> {
        self.elements.get_mut(key).and_then(|e| e.forms.first_mut())
    }

    /// All forms nested in `key`, in document order.
    pub fn forms(&self, key: &str) -> &[MemoryForm] {
        self.elements.get(key).map(|e| e.forms.as_slice()).unwrap_or_default()
    }
}

impl ModalTree for MemoryTree {
    type Element = String;

    fn find(&self, key: &str) -> Option<String> {
        self.elements.contains_key(key).then(|| key.to_string())
    }

    fn has_class(&self, element: &String, class: &str) -> bool {
        self.elements.get(element).is_some_and(|e| e.classes.contains(class))
    }

    fn add_class(&mut self, element: &String, class: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, element: &String, class: &str) {
        if let Some(e) = self.elements.get_mut(element) {
            e.classes.remove(class);
        }
    }

    fn reset_first_form(&mut self, element: &String) -> bool {
        match self.form_mut(element) {
            Some(form) => {
                form.reset();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_reset_restores_defaults() {
        let mut form = MemoryForm::new().with_field("name", "").with_field("batch_size", "20");
        form.set("name", "Pale Ale");
        assert!(!form.is_at_defaults());

        form.reset();
        assert!(form.is_at_defaults());
        assert_eq!(form.value("batch_size"), Some("20"));
        assert_eq!(form.reset_count(), 1);
    }

    #[test]
    fn test_set_unknown_field_ignored() {
        let mut form = MemoryForm::new().with_field("name", "");
        form.set("missing", "x");
        assert_eq!(form.value("missing"), None);
        assert!(form.is_at_defaults());
    }

    #[test]
    fn test_find_missing() {
        let tree = MemoryTree::new().with_element("modal-a");
        assert_eq!(tree.find("modal-a").as_deref(), Some("modal-a"));
        assert!(tree.find("modal-b").is_none());
    }

    #[test]
    fn test_class_ops() {
        let mut tree = MemoryTree::new().with_classes("modal-a", &["modal"]);
        let el = tree.find("modal-a").expect("element");

        tree.add_class(&el, "is-active");
        tree.add_class(&el, "is-active");
        assert_eq!(tree.classes("modal-a"), Some(vec!["is-active", "modal"]));

        tree.remove_class(&el, "is-active");
        tree.remove_class(&el, "is-active");
        assert_eq!(tree.classes("modal-a"), Some(vec!["modal"]));
    }

    #[test]
    fn test_only_first_form_reset() {
        let mut tree = MemoryTree::new()
            .with_form("modal-a", MemoryForm::new().with_field("q", ""))
            .with_form("modal-a", MemoryForm::new().with_field("q", ""));
        tree.form_mut("modal-a").expect("form").set("q", "x");

        let el = tree.find("modal-a").expect("element");
        assert!(tree.reset_first_form(&el));

        let forms = tree.forms("modal-a");
        assert_eq!(forms[0].reset_count(), 1);
        assert_eq!(forms[1].reset_count(), 0);
    }

    #[test]
    fn test_reset_without_form() {
        let mut tree = MemoryTree::new().with_element("modal-a");
        let el = tree.find("modal-a").expect("element");
        assert!(!tree.reset_first_form(&el));
    }
}

//! Modal show/hide controller.
//!
//! Visibility is never cached: every operation looks the element up again and
//! reads or writes the active class on it. Missing elements and missing forms
//! are silent no-ops, so pages may reference optional modals freely.

use crate::config::ModalConfig;
use crate::fragment::Fragment;
use crate::tree::ModalTree;

/// Visibility of an existing modal element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// What the startup check did. Informational only; none of these is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupOutcome {
    /// The URL carried no fragment (no `#`, or nothing after it).
    NoFragment,
    /// The fragment named no existing modal element.
    NotFound { key: String },
    /// The named modal was made visible.
    Opened { key: String },
}

/// Shows and hides modals in a UI tree.
#[derive(Debug, Clone)]
pub struct ModalController<T> {
    tree: T,
    config: ModalConfig,
}

impl<T: ModalTree> ModalController<T> {
    /// Controller with the default `modal-` prefix and `is-active` class.
    pub fn new(tree: T) -> Self {
        Self::with_config(tree, ModalConfig::default())
    }

    pub fn with_config(tree: T, config: ModalConfig) -> Self {
        Self { tree, config }
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn into_tree(self) -> T {
        self.tree
    }

    /// Reset the modal's first form, then mark the modal visible.
    pub fn show_modal(&mut self, id: &str) {
        let key = self.config.element_key(id);
        let Some(element) = self.tree.find(&key) else {
            tracing::debug!("show_modal: no element {key}");
            return;
        };

        if !self.tree.reset_first_form(&element) {
            tracing::trace!("show_modal: {key} has no form to reset");
        }
        self.tree.add_class(&element, &self.config.active_class);
        tracing::debug!("modal_shown: {key}");
    }

    /// Mark the modal hidden. Form contents are left untouched.
    pub fn hide_modal(&mut self, id: &str) {
        let key = self.config.element_key(id);
        let Some(element) = self.tree.find(&key) else {
            tracing::debug!("hide_modal: no element {key}");
            return;
        };

        self.tree.remove_class(&element, &self.config.active_class);
        tracing::debug!("modal_hidden: {key}");
    }

    /// One-time page-load check: open the modal named by the URL fragment.
    /// Unlike [`show_modal`](Self::show_modal), no form is reset.
    pub fn open_from_fragment(&mut self, fragment: &Fragment) -> StartupOutcome {
        if fragment.is_empty() {
            return StartupOutcome::NoFragment;
        }

        let key = self.config.element_key(fragment.as_str());
        let Some(element) = self.tree.find(&key) else {
            tracing::debug!("startup: fragment #{fragment} names no modal");
            return StartupOutcome::NotFound { key };
        };

        self.tree.add_class(&element, &self.config.active_class);
        tracing::info!("startup: opened {key} from fragment");
        StartupOutcome::Opened { key }
    }

    /// Current visibility of `id`, or `None` when no such element exists.
    pub fn visibility(&self, id: &str) -> Option<Visibility> {
        let key = self.config.element_key(id);
        let element = self.tree.find(&key)?;
        if self.tree.has_class(&element, &self.config.active_class) {
            Some(Visibility::Visible)
        } else {
            Some(Visibility::Hidden)
        }
    }
}

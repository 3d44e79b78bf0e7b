//! Element key convention for modals.
//!
//! A modal with id `settings` lives in the element whose id is
//! `modal-settings`. The id is an opaque token chosen by the page author.

/// Prefix joining a modal id to its element key.
pub const DEFAULT_PREFIX: &str = "modal-";

/// Build the element key for `id` with the default prefix.
pub fn id_to_element_key(id: &str) -> String {
    element_key_with_prefix(DEFAULT_PREFIX, id)
}

pub(crate) fn element_key_with_prefix(prefix: &str, id: &str) -> String {
    let mut key = String::with_capacity(prefix.len() + id.len());
    key.push_str(prefix);
    key.push_str(id);
    key
}

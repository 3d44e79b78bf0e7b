//! Modal controller configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ModalError, Result};
use crate::naming::{element_key_with_prefix, DEFAULT_PREFIX};

/// Class the page stylesheet treats as "visible" (Bulma's `is-active`).
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";

/// Settings shared by every controller operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalConfig {
    /// Prepended to a modal id to form its element key.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Class toggled to show or hide a modal.
    #[serde(default = "default_active_class")]
    pub active_class: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_active_class() -> String {
    DEFAULT_ACTIVE_CLASS.to_string()
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { prefix: default_prefix(), active_class: default_active_class() }
    }
}

impl ModalConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ModalError::from_json_error(&e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the DOM would refuse as class tokens or ids.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(ModalError::invalid_config("prefix", "must not be empty"));
        }
        if self.active_class.is_empty() {
            return Err(ModalError::invalid_config("active_class", "must not be empty"));
        }
        if self.active_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ModalError::invalid_config(
                "active_class",
                format!("{:?} contains whitespace", self.active_class),
            ));
        }
        Ok(())
    }

    /// Element key for `id` under this config's prefix.
    pub fn element_key(&self, id: &str) -> String {
        element_key_with_prefix(&self.prefix, id)
    }
}

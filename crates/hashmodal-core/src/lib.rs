//! # hashmodal core
//!
//! Host-independent modal logic for hashmodal.
//!
//! - **`naming`** - The `modal-<id>` element key convention
//! - **`config`** - Prefix and active class configuration
//! - **`fragment`** - URL fragment extraction for the startup auto-open
//! - **`tree`** - The UI tree seam plus an in-memory implementation
//! - **`controller`** - Show, hide and startup operations
//!
//! ## Architecture Role
//!
//! ```text
//!            hashmodal-core (this crate)
//!                    │
//!                    ▼
//!            hashmodal-web (wasm, DomTree)
//! ```
//!
//! The controller never reaches for a global document: the tree is handed to
//! it explicitly, so tests drive it with [`MemoryTree`].

pub mod config;
pub mod controller;
pub mod error;
pub mod fragment;
pub mod naming;
pub mod tree;

pub use config::ModalConfig;
pub use controller::{ModalController, StartupOutcome, Visibility};
pub use error::{ModalError, Result};
pub use fragment::Fragment;
pub use naming::{id_to_element_key, DEFAULT_PREFIX};
pub use tree::{MemoryForm, MemoryTree, ModalTree};

//! hashmodal - browser bindings
//!
//! Exposes `showModal(id)`, `hideModal(id)` and `configureModals(config)` to
//! page scripts, and opens the modal named by the URL fragment once the
//! document has been parsed.

pub mod bindings;
pub mod dom;
pub mod startup;

pub use dom::DomTree;

use wasm_bindgen::prelude::*;

/// Module start hook, run by wasm-bindgen when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Info));

    log::info!("hashmodal {} loaded", env!("GIT_VERSION"));

    startup::run_when_ready();
}

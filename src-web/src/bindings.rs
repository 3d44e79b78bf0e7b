//! Functions callable from page markup, e.g. `onclick="showModal('login')"`.
//!
//! Show and hide never throw: a missing modal is a no-op. Only
//! `configureModals` reports errors, since a bad config is a setup mistake.

use std::cell::RefCell;

use hashmodal_core::{ModalConfig, ModalController, ModalError};
use wasm_bindgen::prelude::*;

use crate::dom::DomTree;
use crate::startup;

thread_local! {
    static CONFIG: RefCell<ModalConfig> = RefCell::new(ModalConfig::default());
}

/// Snapshot of the active configuration.
pub fn current_config() -> ModalConfig {
    CONFIG.with(|config| config.borrow().clone())
}

fn with_controller(op: impl FnOnce(&mut ModalController<DomTree>)) {
    let Some(tree) = DomTree::from_window() else {
        log::debug!("no document; modal call ignored");
        return;
    };
    let mut controller = ModalController::with_config(tree, current_config());
    op(&mut controller);
}

/// Reset the modal's form and make it visible.
#[wasm_bindgen(js_name = showModal)]
pub fn show_modal(id: &str) {
    with_controller(|controller| controller.show_modal(id));
}

/// Make the modal hidden.
#[wasm_bindgen(js_name = hideModal)]
pub fn hide_modal(id: &str) {
    with_controller(|controller| controller.hide_modal(id));
}

/// Replace the active configuration.
///
/// Accepts a JSON string or a plain object with optional `prefix` and
/// `active_class` fields. On error the previous configuration stays active.
/// A page-load fragment that matched no modal is checked again under the new
/// configuration.
#[wasm_bindgen(js_name = configureModals)]
pub fn configure_modals(config: JsValue) -> Result<(), JsError> {
    let parsed = parse_config(config).map_err(|e| {
        log::warn!("configureModals rejected: {e}");
        JsError::new(&e.to_string())
    })?;

    log::info!("modal config: prefix={:?} class={:?}", parsed.prefix, parsed.active_class);
    CONFIG.with(|slot| *slot.borrow_mut() = parsed.clone());
    startup::recheck(&parsed);
    Ok(())
}

fn parse_config(value: JsValue) -> Result<ModalConfig, ModalError> {
    if let Some(json) = value.as_string() {
        return ModalConfig::from_json(&json);
    }
    if value.is_undefined() || value.is_null() {
        return Ok(ModalConfig::default());
    }

    let config: ModalConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| ModalError::ConfigParse { message: e.to_string() })?;
    config.validate()?;
    Ok(config)
}

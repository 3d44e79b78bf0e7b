//! Page-load auto-open.
//!
//! The fragment comes from the top-level browsing context, so a page embedded
//! in a frame still reacts to the address bar. A cross-origin parent makes
//! `top.location` unreadable; the frame's own location is used then.
//!
//! The start hook usually runs before page script had a chance to call
//! `configureModals`. A fragment that matched nothing is therefore kept, and
//! checked again each time the configuration changes until a modal opens.

use std::cell::RefCell;

use hashmodal_core::{Fragment, ModalConfig, ModalController, StartupOutcome};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Window};

use crate::bindings;
use crate::dom::DomTree;

enum StartupState {
    /// The check has not run yet.
    Pending,
    /// The fragment named no modal under the config in use at the time.
    Unmatched { document: Document, href: String },
    /// A modal was opened, or there was nothing to open.
    Settled,
}

thread_local! {
    static STATE: RefCell<StartupState> = const { RefCell::new(StartupState::Pending) };
}

/// URL of the top-level page, or of this window when the top is inaccessible.
pub fn current_href(window: &Window) -> Option<String> {
    let top_href = window.top().ok().flatten().and_then(|top| top.location().href().ok());
    top_href.or_else(|| window.location().href().ok())
}

/// Open the modal named by the fragment of `href` in `document`.
///
/// An unparseable `href` counts as having no fragment.
pub fn open_from_href(document: &Document, href: &str, config: &ModalConfig) -> StartupOutcome {
    let fragment = match Fragment::from_url(href) {
        Ok(fragment) => fragment,
        Err(e) => {
            log::warn!("startup skipped: {e}");
            return StartupOutcome::NoFragment;
        }
    };

    let tree = DomTree::new(document.clone());
    ModalController::with_config(tree, config.clone()).open_from_fragment(&fragment)
}

/// Schedule the check for the current window's document.
pub fn run_when_ready() {
    let Some(window) = web_sys::window() else {
        log::debug!("no window; startup skipped");
        return;
    };
    let Some(document) = window.document() else {
        log::debug!("no document; startup skipped");
        return;
    };

    schedule(&document, move || current_href(&window));
}

/// Run the check on `document` now if it is parsed, otherwise once on its
/// `DOMContentLoaded`. `href` is read when the check runs.
pub fn schedule<F>(document: &Document, href: F)
where
    F: FnOnce() -> Option<String> + 'static,
{
    if document.ready_state() != "loading" {
        run(document, href);
        return;
    }

    let on_ready = {
        let document = document.clone();
        Closure::once_into_js(move || run(&document, href))
    };
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
        &options,
    ) {
        log::warn!("could not defer startup: {e:?}");
    }
}

/// Re-run an unmatched startup check under `config`.
pub(crate) fn recheck(config: &ModalConfig) {
    let pending = STATE.with(|state| match &*state.borrow() {
        StartupState::Unmatched { document, href } => Some((document.clone(), href.clone())),
        StartupState::Pending | StartupState::Settled => None,
    });
    if let Some((document, href)) = pending {
        settle(document, href, config);
    }
}

fn run(document: &Document, href: impl FnOnce() -> Option<String>) {
    let Some(href) = href() else {
        log::debug!("location unavailable; startup skipped");
        STATE.with(|state| *state.borrow_mut() = StartupState::Settled);
        return;
    };
    settle(document.clone(), href, &bindings::current_config());
}

fn settle(document: Document, href: String, config: &ModalConfig) {
    let outcome = open_from_href(&document, &href, config);
    log::debug!("startup outcome: {outcome:?}");

    let next = match outcome {
        StartupOutcome::NotFound { .. } => StartupState::Unmatched { document, href },
        StartupOutcome::NoFragment | StartupOutcome::Opened { .. } => StartupState::Settled,
    };
    STATE.with(|state| *state.borrow_mut() = next);
}

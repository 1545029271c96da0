// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for media element tools.
//!
//! Injected into a page as a content script, this crate finds the page's media
//! elements once, wraps each in a container next to a floating control panel,
//! and keeps the panel's buttons in sync with the element:
//!
//! - [`Met`]: one wrapped media element and its panel
//! - [`attach_all`]: scan a document and wrap every match
//! - [`load_config`]: read optional overrides from the page
//!
//! Elements added to the document after the scan are not picked up.
//!
//! Build with: `wasm-pack build --target no-modules met_web`

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

mod builder;
mod config;
mod drag;
mod listener;
mod media;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use met_core::config::MetConfig;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlMediaElement};

pub use builder::Met;
pub use config::{CONFIG_GLOBAL, load_config};
pub use media::DomMedia;
pub use surface::DomWidget;

thread_local! {
    /// Every panel built on this page. Holding them keeps their listeners alive.
    static ATTACHED: RefCell<Vec<Met>> = const { RefCell::new(Vec::new()) };
}

/// Content-script entry point.
///
/// Installs the panic hook and logger, reads configuration, and wraps every
/// media element matching the configured selector.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = Rc::new(load_config());
    let document = web_sys::window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;

    let mets = attach_all(&document, &config)?;
    log::info!(
        "met: attached {} panel(s) for selector {:?}",
        mets.len(),
        config.selector
    );
    ATTACHED.with(|attached| attached.borrow_mut().extend(mets));
    Ok(())
}

/// Wraps every media element in `document` matching `config.selector`.
///
/// Matches that are not media elements, or that have no parent to be swapped
/// out of, are skipped. A failure while wrapping one element is logged and
/// does not stop the others.
pub fn attach_all(document: &Document, config: &Rc<MetConfig>) -> Result<Vec<Met>, JsValue> {
    let nodes = document.query_selector_all(&config.selector)?;
    let mut mets = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(media) = node.dyn_into::<HtmlMediaElement>() else {
            log::warn!("met: selector matched a non-media element; skipping");
            continue;
        };
        match Met::attach(document, media, Rc::clone(config)) {
            Ok(Some(met)) => mets.push(met),
            Ok(None) => log::warn!("met: media element #{i} is detached; skipping"),
            Err(err) => log::error!("met: failed to wrap media element #{i}: {err:?}"),
        }
    }
    Ok(mets)
}

/// Returns the number of panels attached by [`start`].
#[wasm_bindgen]
#[must_use]
pub fn attached_count() -> usize {
    ATTACHED.with(|attached| attached.borrow().len())
}

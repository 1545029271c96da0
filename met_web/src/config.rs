// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration overrides from the host page.

use met_core::config::MetConfig;
use wasm_bindgen::JsValue;

/// Name of the global object read by [`load_config`].
pub const CONFIG_GLOBAL: &str = "MET_CONFIG";

/// Reads `globalThis.MET_CONFIG` and merges it over the defaults.
///
/// Any field may be omitted. A missing global yields the defaults; a global
/// that fails to parse or validate is logged and ignored.
#[must_use]
pub fn load_config() -> MetConfig {
    let raw = match js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => return MetConfig::default(),
    };

    let config: MetConfig = match serde_wasm_bindgen::from_value(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("met: ignoring {CONFIG_GLOBAL}: {err}");
            return MetConfig::default();
        }
    };

    if let Err(err) = config.validate() {
        log::warn!("met: ignoring {CONFIG_GLOBAL}: {err}");
        return MetConfig::default();
    }

    log::debug!("met: loaded {CONFIG_GLOBAL} override: {config:?}");
    config
}

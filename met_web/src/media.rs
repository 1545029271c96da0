// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`MediaElement`] over a DOM `HTMLMediaElement`.
//!
//! Setters that the browser may reject (a negative `playbackRate`, a
//! `currentTime` on an element without media) go through `Reflect::set` so a
//! thrown exception comes back as an error instead of unwinding through wasm.
//! Rejections are logged and otherwise ignored.

use met_core::media::{MediaAttribute, MediaElement};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

/// A page media element, as seen by the panel.
#[derive(Clone, Debug)]
pub struct DomMedia(HtmlMediaElement);

impl DomMedia {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: HtmlMediaElement) -> Self {
        Self(element)
    }

    /// Returns the underlying element.
    #[must_use]
    pub fn element(&self) -> &HtmlMediaElement {
        &self.0
    }

    fn set_property(&self, name: &str, value: JsValue) {
        if let Err(err) = js_sys::Reflect::set(&self.0, &JsValue::from_str(name), &value) {
            log::warn!("met: setting {name} to {value:?} was rejected: {err:?}");
        }
    }
}

impl MediaElement for DomMedia {
    fn paused(&self) -> bool {
        self.0.paused()
    }

    fn play(&self) {
        match self.0.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("met: play() was rejected: {err:?}");
                }
            }),
            Err(err) => log::warn!("met: play() threw: {err:?}"),
        }
    }

    fn pause(&self) {
        if let Err(err) = self.0.pause() {
            log::warn!("met: pause() threw: {err:?}");
        }
    }

    fn playback_rate(&self) -> f64 {
        self.0.playback_rate()
    }

    fn set_playback_rate(&self, rate: f64) {
        self.set_property("playbackRate", JsValue::from_f64(rate));
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.set_property("currentTime", JsValue::from_f64(seconds));
    }

    fn muted(&self) -> bool {
        self.0.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn preserves_pitch(&self) -> bool {
        js_sys::Reflect::get(&self.0, &JsValue::from_str("preservesPitch"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn set_preserves_pitch(&self, preserve: bool) {
        self.set_property("preservesPitch", JsValue::from_bool(preserve));
    }

    fn has_attribute(&self, attr: MediaAttribute) -> bool {
        self.0.has_attribute(attr.name())
    }

    fn toggle_attribute(&self, attr: MediaAttribute) -> bool {
        match self.0.toggle_attribute(attr.name()) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("met: toggling {} failed: {err:?}", attr.name());
                self.has_attribute(attr)
            }
        }
    }

    fn remove_attribute(&self, attr: MediaAttribute) {
        if let Err(err) = self.0.remove_attribute(attr.name()) {
            log::warn!("met: removing {} failed: {err:?}", attr.name());
        }
    }
}

// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned DOM event listeners.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

type Handler = Closure<dyn FnMut(Event)>;

/// A listener registered on `target` for as long as this value lives.
///
/// Dropping the binding unregisters the listener and frees the closure.
pub(crate) struct EventBinding {
    target: EventTarget,
    name: &'static str,
    closure: Handler,
}

impl EventBinding {
    /// Registers `handler` for `name` events on `target`.
    pub(crate) fn new(
        target: &EventTarget,
        name: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure: Handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            name,
            closure,
        })
    }

    /// Returns the event type this binding listens for.
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for EventBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBinding")
            .field("target", &"EventTarget")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML drag-and-drop wiring for the panel.

use std::cell::Cell;
use std::rc::Rc;

use met_core::drag::{DragTracker, Offset};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, MouseEvent};

use crate::listener::EventBinding;

/// Makes `panel` draggable. The panel is assumed to be absolutely positioned.
pub(crate) fn make_draggable(panel: &HtmlElement) -> Result<[EventBinding; 2], JsValue> {
    panel.set_attribute("draggable", "true")?;
    let tracker = Rc::new(Cell::new(DragTracker::new()));

    let start_tracker = Rc::clone(&tracker);
    let start = EventBinding::new(panel, "dragstart", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let mut drag = start_tracker.get();
        drag.begin(pointer_offset(event));
        start_tracker.set(drag);
    })?;

    let end_panel = panel.clone();
    let end = EventBinding::new(panel, "dragend", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let mut drag = tracker.get();
        let current = Offset::new(
            f64::from(end_panel.offset_left()),
            f64::from(end_panel.offset_top()),
        );
        let dest = drag.end(current, pointer_offset(event));
        tracker.set(drag);

        let style = end_panel.style();
        if let Err(err) = style
            .set_property("top", &px(dest.y))
            .and_then(|()| style.set_property("left", &px(dest.x)))
        {
            log::warn!("met: moving panel failed: {err:?}");
        }
    })?;

    Ok([start, end])
}

fn pointer_offset(event: &MouseEvent) -> Offset {
    Offset::new(f64::from(event.offset_x()), f64::from(event.offset_y()))
}

fn px(value: f64) -> String {
    format!("{value}px")
}

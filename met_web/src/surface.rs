// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`WidgetSurface`] over a DOM element.

use met_core::panel::WidgetSurface;
use web_sys::HtmlElement;

/// A widget node inside the panel.
#[derive(Clone, Debug)]
pub struct DomWidget(HtmlElement);

impl DomWidget {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    /// Returns the underlying element.
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl WidgetSurface for DomWidget {
    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(err) = self.0.class_list().toggle_with_force(class, present) {
            log::warn!("met: toggling class {class:?} failed: {err:?}");
        }
    }

    fn set_line_height(&self, value: Option<&str>) {
        let style = self.0.style();
        let result = match value {
            Some(v) => style.set_property("line-height", v),
            None => style.remove_property("line-height").map(drop),
        };
        if let Err(err) = result {
            log::warn!("met: setting line-height failed: {err:?}");
        }
    }
}

// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container and panel construction.
//!
//! [`Met::attach`] builds this tree and swaps it in where the media element
//! used to be:
//!
//! ```text
//!   div.met
//!   ├── div.met-panel
//!   │   ├── header widgets
//!   │   └── div.met-collapse
//!   │       └── groups / widgets
//!   └── <video> (the original element, moved)
//! ```
//!
//! The swap happens last, after every listener is attached. Listeners on the
//! media element survive the move.

use std::rc::Rc;

use met_core::config::MetConfig;
use met_core::layout::{GroupRole, PanelLayout};
use met_core::panel::ControlPanel;
use met_core::widget::PanelAction;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, HtmlMediaElement};

use crate::drag::make_draggable;
use crate::listener::EventBinding;
use crate::media::DomMedia;
use crate::surface::DomWidget;

type DomPanel = ControlPanel<DomMedia, DomWidget>;

/// Events the panel keeps away from the page and the media element.
const ISOLATED_EVENTS: [&str; 3] = ["click", "dblclick", "contextmenu"];

/// A media element wrapped with its control panel.
///
/// Dropping a `Met` unregisters its listeners but leaves the DOM as is.
pub struct Met {
    container: HtmlElement,
    panel_node: HtmlElement,
    panel: Rc<DomPanel>,
    bindings: Vec<EventBinding>,
}

impl core::fmt::Debug for Met {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Met")
            .field("container", &"HtmlElement")
            .field("panel_node", &"HtmlElement")
            .field("panel", &self.panel)
            .field("bindings_len", &self.bindings.len())
            .finish()
    }
}

impl Met {
    /// Wraps `media` in a container with a control panel.
    ///
    /// Returns `Ok(None)` without touching the DOM if `media` has no parent.
    /// The media element's playback state is not changed.
    pub fn attach(
        document: &Document,
        media: HtmlMediaElement,
        config: Rc<MetConfig>,
    ) -> Result<Option<Self>, JsValue> {
        let Some(parent) = media.parent_node() else {
            return Ok(None);
        };
        let classes = &config.classes;

        let container = element(document, "div", &classes.container)?;
        let panel_node = element(document, "div", &classes.panel)?;
        let collapse = element(document, "div", &classes.collapse)?;

        let layout = PanelLayout::for_variant(config.layout);
        let mut wrappers = Vec::new();
        for group in &layout.groups {
            if let Some(class) = group.role.wrapper_class(classes) {
                wrappers.push((group.role, element(document, "div", class)?));
            }
        }

        let panel = ControlPanel::build(
            DomMedia::new(media.clone()),
            Rc::clone(&config),
            &layout,
            |_, kind, role| {
                let node: HtmlElement = document.create_element(kind.tag().name())?.unchecked_into();
                let host = match role {
                    GroupRole::Header => &panel_node,
                    GroupRole::Collapse => &collapse,
                    GroupRole::Playback | GroupRole::Toggles => wrappers
                        .iter()
                        .find(|(r, _)| *r == role)
                        .map_or(&collapse, |(_, wrapper)| wrapper),
                };
                host.append_child(&node)?;
                Ok::<_, JsValue>(DomWidget::new(node))
            },
        )?;
        let panel = Rc::new(panel);

        let mut bindings = Vec::new();
        bind_clicks(&panel, &panel_node, &mut bindings)?;

        for event in panel.registry().events() {
            let target = Rc::clone(&panel);
            bindings.push(EventBinding::new(&media, event.name(), move |_| {
                target.notify(event);
            })?);
        }

        if config.stop_propagation {
            for name in ISOLATED_EVENTS {
                bindings.push(EventBinding::new(&panel_node, name, |event| {
                    event.stop_immediate_propagation();
                })?);
            }
        }

        if config.is_draggable() {
            bindings.extend(make_draggable(&panel_node)?);
        }

        parent.replace_child(&container, &media)?;
        container.append_child(&panel_node)?;
        container.append_child(&media)?;
        panel_node.append_child(&collapse)?;
        for (_, wrapper) in &wrappers {
            collapse.append_child(wrapper)?;
        }

        log::debug!(
            "met: built {:?} panel with {} widgets and {} listeners",
            config.layout,
            layout.len(),
            bindings.len()
        );

        Ok(Some(Self {
            container,
            panel_node,
            panel,
            bindings,
        }))
    }

    /// Returns the wrapper holding the panel and the media element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Returns the panel node.
    #[must_use]
    pub fn panel_node(&self) -> &HtmlElement {
        &self.panel_node
    }

    /// Returns the wrapped media element.
    #[must_use]
    pub fn media(&self) -> &HtmlMediaElement {
        self.panel.media().element()
    }

    /// Returns the event types with a listener owned by this panel.
    pub fn listened_events(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.iter().map(EventBinding::name)
    }
}

/// Adds one click listener per widget, routing to [`ControlPanel::click`] and
/// applying any panel-level effect to `panel_node`.
fn bind_clicks(
    panel: &Rc<DomPanel>,
    panel_node: &HtmlElement,
    bindings: &mut Vec<EventBinding>,
) -> Result<(), JsValue> {
    for (id, widget) in panel.widgets() {
        let target = Rc::clone(panel);
        let node = panel_node.clone();
        bindings.push(EventBinding::new(
            widget.surface().element(),
            "click",
            move |_| match target.click(id) {
                Some(PanelAction::TogglePin) => {
                    let pinned = &target.config().classes.pinned;
                    if let Err(err) = node.class_list().toggle_with_force(pinned, target.is_pinned()) {
                        log::warn!("met: pinning panel failed: {err:?}");
                    }
                }
                Some(PanelAction::Close) => node.remove(),
                None => {}
            },
        )?);
    }
    Ok(())
}

fn element(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element(tag)?.unchecked_into();
    el.class_list().add_1(class)?;
    Ok(el)
}

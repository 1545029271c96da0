// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core model for media element tools.
//!
//! `met_core` describes a floating control panel that sits on top of a page's
//! media element: which widgets it contains, what each widget does when
//! clicked, how each widget derives its visible state from the media element,
//! and which native media events force a widget to repaint. It is `no_std`
//! compatible (with `alloc`) and never talks to a browser directly.
//!
//! # Architecture
//!
//! ```text
//!   MetConfig ──► PanelLayout ──► ControlPanel::build()
//!                                      │
//!                 ┌────────────────────┤
//!                 ▼                    ▼
//!   WidgetSurface (per widget)   RefreshRegistry<WidgetId>
//!                 ▲                    │
//!                 │                    ▼
//!        ControlPanel::refresh ◄── ControlPanel::notify(MediaEvent)
//! ```
//!
//! **[`config`]** — Immutable glyph table, CSS class contract, and step sizes.
//!
//! **[`media`]** — The [`MediaElement`](media::MediaElement) trait that
//! backends implement over a real media element, plus the native event and
//! attribute vocabulary.
//!
//! **[`widget`]** — [`WidgetKind`](widget::WidgetKind), a tagged variant per
//! control. Click effects and views are pure functions of media state.
//!
//! **[`layout`]** — Group structure of the panel for each layout variant.
//!
//! **[`registry`]** — [`RefreshRegistry`](registry::RefreshRegistry), the
//! per-element observer mapping native events to subscribed widgets.
//!
//! **[`panel`]** — [`ControlPanel`](panel::ControlPanel), which instantiates
//! widgets, wires the registry, and routes clicks and native events.
//!
//! **[`drag`]** — Offset arithmetic for repositioning the panel.
//!
//! # Crate features
//!
//! - `serde` (disabled by default): Derives `Serialize`/`Deserialize` for the
//!   configuration types so overrides can be read from a host object.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod drag;
pub mod layout;
pub mod media;
pub mod panel;
pub mod registry;
pub mod widget;

#[cfg(test)]
mod testing;

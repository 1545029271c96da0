// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel construction and event routing.
//!
//! [`ControlPanel`] instantiates one widget per [`WidgetKind`] in a
//! [`PanelLayout`], subscribes stateful widgets in a [`RefreshRegistry`], and
//! routes clicks and native media events to the right widgets.
//!
//! The visible side of each widget is a backend-provided [`WidgetSurface`]
//! (a DOM element on the web). The panel writes to surfaces but never reads
//! them back: every refresh recomputes the view from the media element.
//!
//! # Typical wiring
//!
//! ```rust,ignore
//! let panel = Rc::new(ControlPanel::build(media, config, &layout, |id, kind, role| {
//!     let el = create_widget_element(kind, role)?;
//!     on_click(&el, move || panel.click(id));
//!     Ok(el)
//! })?);
//!
//! for event in panel.registry().events() {
//!     on_native(event, move || panel.notify(event));
//! }
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use crate::config::MetConfig;
use crate::layout::{GroupRole, PanelLayout};
use crate::media::{MediaElement, MediaEvent};
use crate::registry::RefreshRegistry;
use crate::widget::{PanelAction, WidgetKind, pin_view};

/// The visible side of a widget.
///
/// Implemented by backends over their native node type. Methods take `&self`
/// because native nodes are shared handles.
pub trait WidgetSurface {
    /// Replaces the widget's text content.
    fn set_label(&self, label: &str);

    /// Adds (`present == true`) or removes a class.
    fn set_class(&self, class: &str, present: bool);

    /// Sets the CSS `line-height`, or clears it for `None`.
    fn set_line_height(&self, value: Option<&str>);
}

/// Index of a widget within its [`ControlPanel`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(u32);

impl WidgetId {
    /// Returns the raw index (construction order).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WidgetId({})", self.0)
    }
}

/// One instantiated widget.
#[derive(Debug)]
pub struct Widget<W> {
    kind: WidgetKind,
    role: GroupRole,
    surface: W,
}

impl<W> Widget<W> {
    /// Returns the widget's kind.
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Returns the group the widget was placed in.
    #[must_use]
    pub fn role(&self) -> GroupRole {
        self.role
    }

    /// Returns the backend surface.
    #[must_use]
    pub fn surface(&self) -> &W {
        &self.surface
    }
}

/// A constructed control panel bound to one media element.
///
/// Built once by [`build`](Self::build); the widget list and registry are
/// fixed afterwards. The only mutable state is whether the panel is pinned.
pub struct ControlPanel<M, W> {
    media: M,
    config: Rc<MetConfig>,
    widgets: Vec<Widget<W>>,
    registry: RefreshRegistry<WidgetId>,
    pinned: Cell<bool>,
}

impl<M, W> fmt::Debug for ControlPanel<M, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlPanel")
            .field("media", &"MediaElement")
            .field("config", &self.config)
            .field("widgets_len", &self.widgets.len())
            .field("events", &self.registry.events().collect::<Vec<_>>())
            .field("pinned", &self.pinned.get())
            .finish()
    }
}

impl<M: MediaElement, W: WidgetSurface> ControlPanel<M, W> {
    /// Builds a panel for `media` with the widgets in `layout`.
    ///
    /// `make_surface` is called once per widget, in layout order, and must
    /// return the widget's surface already placed in its group. The panel then
    /// sets the initial label and class, subscribes the widget to its native
    /// events, and refreshes it once so it reflects the current media state.
    ///
    /// Errors from `make_surface` abort construction and are returned as is.
    pub fn build<E>(
        media: M,
        config: Rc<MetConfig>,
        layout: &PanelLayout,
        mut make_surface: impl FnMut(WidgetId, WidgetKind, GroupRole) -> Result<W, E>,
    ) -> Result<Self, E> {
        let mut panel = Self {
            media,
            config,
            widgets: Vec::with_capacity(layout.len()),
            registry: RefreshRegistry::new(),
            pinned: Cell::new(false),
        };

        for group in &layout.groups {
            for &kind in &group.widgets {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "a panel holds a few dozen widgets at most"
                )]
                let id = WidgetId(panel.widgets.len() as u32);
                let surface = make_surface(id, kind, group.role)?;
                surface.set_label(kind.initial_label(&panel.config));
                if let Some(class) = kind.class(&panel.config) {
                    surface.set_class(class, true);
                }
                for &event in kind.subscriptions() {
                    panel.registry.subscribe(event, id);
                }
                panel.widgets.push(Widget {
                    kind,
                    role: group.role,
                    surface,
                });
                panel.refresh(id);
            }
        }

        Ok(panel)
    }

    /// Recomputes one widget's visible state from the media element.
    ///
    /// Returns `false` if `id` does not belong to this panel.
    pub fn refresh(&self, id: WidgetId) -> bool {
        let Some(widget) = self.widgets.get(id.0 as usize) else {
            return false;
        };
        let surface = &widget.surface;
        if widget.kind == WidgetKind::Pin {
            let view = pin_view(self.pinned.get(), &self.config);
            surface.set_label(view.label);
            surface.set_line_height(view.line_height);
        } else if let Some(view) = widget.kind.view(&self.media, &self.config) {
            if let Some(label) = &view.label {
                surface.set_label(label);
            }
            if let Some(on) = view.on {
                surface.set_class(&self.config.classes.on, on);
            }
        }
        true
    }

    /// Refreshes every widget subscribed to `event`.
    ///
    /// Backends call this from their single native listener for `event`.
    /// Returns the number of widgets refreshed.
    pub fn notify(&self, event: MediaEvent) -> usize {
        self.registry.notify(event, |&id| {
            self.refresh(id);
        })
    }

    /// Handles a click on widget `id`.
    ///
    /// Applies the widget's effect to the media element and refreshes the
    /// widget when no native event will. Panel-level effects are returned for
    /// the backend to apply to its panel node; for
    /// [`PanelAction::TogglePin`] the pinned state has already flipped (see
    /// [`is_pinned`](Self::is_pinned)).
    pub fn click(&self, id: WidgetId) -> Option<PanelAction> {
        let widget = self.widgets.get(id.0 as usize)?;
        let outcome = widget.kind.click(&self.media, &self.config);
        if outcome.panel == Some(PanelAction::TogglePin) {
            self.pinned.set(!self.pinned.get());
            self.refresh(id);
        }
        if outcome.refresh_self {
            self.refresh(id);
        }
        outcome.panel
    }
}

impl<M, W> ControlPanel<M, W> {
    /// Returns the controlled media element.
    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &MetConfig {
        &self.config
    }

    /// Returns the native-event registry.
    #[must_use]
    pub fn registry(&self) -> &RefreshRegistry<WidgetId> {
        &self.registry
    }

    /// Returns the widget with the given id.
    #[must_use]
    pub fn widget(&self, id: WidgetId) -> Option<&Widget<W>> {
        self.widgets.get(id.0 as usize)
    }

    /// Iterates over widgets in construction order.
    pub fn widgets(&self) -> impl Iterator<Item = (WidgetId, &Widget<W>)> + '_ {
        self.widgets.iter().enumerate().map(|(i, w)| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "ids were assigned from the same indices"
            )]
            let id = WidgetId(i as u32);
            (id, w)
        })
    }

    /// Returns the id of the first widget of `kind`.
    #[must_use]
    pub fn find(&self, kind: WidgetKind) -> Option<WidgetId> {
        self.widgets()
            .find(|(_, w)| w.kind == kind)
            .map(|(id, _)| id)
    }

    /// Returns whether the panel is pinned.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.pinned.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaAttribute;
    use crate::testing::{FakeMedia, FakeSurface};

    type TestPanel = ControlPanel<FakeMedia, FakeSurface>;

    fn build(media: FakeMedia, config: MetConfig) -> TestPanel {
        let layout = PanelLayout::for_variant(config.layout);
        let built: Result<_, ()> =
            ControlPanel::build(media, Rc::new(config), &layout, |_, _, _| {
                Ok(FakeSurface::default())
            });
        built.unwrap()
    }

    fn surface(panel: &TestPanel, kind: WidgetKind) -> &FakeSurface {
        let id = panel.find(kind).unwrap();
        panel.widget(id).unwrap().surface()
    }

    fn click(panel: &TestPanel, kind: WidgetKind) -> Option<PanelAction> {
        panel.click(panel.find(kind).unwrap())
    }

    /// Delivers every native event the fake media queued, like the browser
    /// would after the click handler returns.
    fn pump(panel: &TestPanel) {
        for event in panel.media().take_events() {
            panel.notify(event);
        }
    }

    #[test]
    fn initial_paint_matches_media_state() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        let on = &panel.config().classes.on;

        assert_eq!(
            surface(&panel, WidgetKind::PlayPause).label(),
            panel.config().symbols.play
        );
        assert_eq!(surface(&panel, WidgetKind::RateIndicator).label(), "1.00");
        let mute = surface(&panel, WidgetKind::Mute);
        assert_eq!(mute.label(), panel.config().symbols.mute);
        assert!(mute.has_class(on), "unmuted media highlights the mute button");
        assert!(!surface(&panel, WidgetKind::Loop).has_class(on));
        assert!(surface(&panel, WidgetKind::PreservePitch).has_class(on));
    }

    #[test]
    fn indicator_carries_its_class() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        let indicator = surface(&panel, WidgetKind::RateIndicator);
        assert!(indicator.has_class("met-playback-indicator"));
    }

    #[test]
    fn speed_up_three_times_shows_1_30() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        for _ in 0..3 {
            click(&panel, WidgetKind::SpeedUp);
            pump(&panel);
        }
        assert_eq!(surface(&panel, WidgetKind::RateIndicator).label(), "1.30");
    }

    #[test]
    fn speed_up_then_down_restores_rate() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        click(&panel, WidgetKind::SpeedUp);
        pump(&panel);
        assert_eq!(surface(&panel, WidgetKind::RateIndicator).label(), "1.10");
        click(&panel, WidgetKind::SpeedDown);
        pump(&panel);

        let rate = panel.media().playback_rate();
        assert!((rate - 1.0).abs() < 1e-9, "expected 1.0, got {rate}");
        assert_eq!(surface(&panel, WidgetKind::RateIndicator).label(), "1.00");
    }

    #[test]
    fn seek_round_trip_without_clamping() {
        let media = FakeMedia::new();
        media.set_current_time(0.5);
        let panel = build(media, MetConfig::new());

        click(&panel, WidgetKind::SeekBack);
        let t = panel.media().current_time();
        assert!((t + 0.5).abs() < 1e-9, "expected -0.5, got {t}");

        click(&panel, WidgetKind::SeekForward);
        let t = panel.media().current_time();
        assert!((t - 0.5).abs() < 1e-9, "expected 0.5, got {t}");
    }

    #[test]
    fn play_pause_parity() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        let original = panel.media().paused();

        click(&panel, WidgetKind::PlayPause);
        pump(&panel);
        assert_ne!(panel.media().paused(), original);
        assert_eq!(
            surface(&panel, WidgetKind::PlayPause).label(),
            panel.config().symbols.pause
        );

        click(&panel, WidgetKind::PlayPause);
        pump(&panel);
        assert_eq!(panel.media().paused(), original);
        assert_eq!(
            surface(&panel, WidgetKind::PlayPause).label(),
            panel.config().symbols.play
        );
    }

    #[test]
    fn external_changes_repaint_through_native_events() {
        let panel = build(FakeMedia::new(), MetConfig::new());

        // The page mutes the element on its own.
        panel.media().set_muted(true);
        pump(&panel);

        let mute = surface(&panel, WidgetKind::Mute);
        assert_eq!(mute.label(), panel.config().symbols.muted);
        assert!(!mute.has_class(&panel.config().classes.on));
    }

    #[test]
    fn native_controls_toggle_twice() {
        let media = FakeMedia::new();
        media.set_attribute(MediaAttribute::ControlsList);
        let panel = build(media, MetConfig::new());
        let on = &panel.config().classes.on;

        click(&panel, WidgetKind::NativeControls);
        assert!(panel.media().has_attribute(MediaAttribute::Controls));
        assert!(surface(&panel, WidgetKind::NativeControls).has_class(on));

        click(&panel, WidgetKind::NativeControls);
        assert!(!panel.media().has_attribute(MediaAttribute::Controls));
        assert!(!panel.media().has_attribute(MediaAttribute::ControlsList));
        assert!(!surface(&panel, WidgetKind::NativeControls).has_class(on));
    }

    #[test]
    fn self_refreshing_toggles_need_no_event() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        let on = &panel.config().classes.on;

        click(&panel, WidgetKind::Loop);
        assert!(surface(&panel, WidgetKind::Loop).has_class(on));

        click(&panel, WidgetKind::PreservePitch);
        assert!(!panel.media().preserves_pitch());
        assert!(!surface(&panel, WidgetKind::PreservePitch).has_class(on));
        assert!(
            panel.media().take_events().is_empty(),
            "loop and pitch toggles fire no native events"
        );
    }

    #[test]
    fn registry_has_one_entry_per_event() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        let mut events: Vec<_> = panel.registry().events().collect();
        events.sort();
        assert_eq!(
            events,
            [
                MediaEvent::Play,
                MediaEvent::Pause,
                MediaEvent::RateChange,
                MediaEvent::VolumeChange
            ]
        );

        let play_pause = panel.find(WidgetKind::PlayPause).unwrap();
        assert_eq!(panel.registry().subscribers(MediaEvent::Play), &[play_pause]);
        assert_eq!(panel.registry().subscribers(MediaEvent::Pause), &[play_pause]);
        assert_eq!(panel.notify(MediaEvent::RateChange), 1);
    }

    #[test]
    fn refresh_is_idempotent() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        let id = panel.find(WidgetKind::Mute).unwrap();
        let before = panel.widget(id).unwrap().surface().snapshot();
        assert!(panel.refresh(id));
        assert!(panel.refresh(id));
        assert_eq!(panel.widget(id).unwrap().surface().snapshot(), before);
    }

    #[test]
    fn pin_flips_state_and_logo() {
        let panel = build(FakeMedia::new(), MetConfig::compact());
        assert!(!panel.is_pinned());

        assert_eq!(click(&panel, WidgetKind::Pin), Some(PanelAction::TogglePin));
        assert!(panel.is_pinned());
        let pin = surface(&panel, WidgetKind::Pin);
        assert_eq!(pin.label(), panel.config().symbols.pinned);
        assert_eq!(pin.line_height().as_deref(), Some("80%"));

        click(&panel, WidgetKind::Pin);
        assert!(!panel.is_pinned());
        let pin = surface(&panel, WidgetKind::Pin);
        assert_eq!(pin.label(), panel.config().symbols.logo);
        assert_eq!(pin.line_height(), None);
    }

    #[test]
    fn close_is_reported_and_leaves_media_alone() {
        let panel = build(FakeMedia::new(), MetConfig::compact());
        let writes = panel.media().writes();
        assert_eq!(click(&panel, WidgetKind::Close), Some(PanelAction::Close));
        assert_eq!(panel.media().writes(), writes);
    }

    #[test]
    fn construction_leaves_media_untouched() {
        let panel = build(FakeMedia::new(), MetConfig::compact());
        assert_eq!(panel.media().writes(), 0);
    }

    #[test]
    fn surface_errors_abort_construction() {
        let mut calls = 0;
        let result: Result<ControlPanel<FakeMedia, FakeSurface>, &str> = ControlPanel::build(
            FakeMedia::new(),
            Rc::new(MetConfig::new()),
            &PanelLayout::grouped(),
            |_, _, _| {
                calls += 1;
                if calls == 3 {
                    Err("no document")
                } else {
                    Ok(FakeSurface::default())
                }
            },
        );
        assert_eq!(result.unwrap_err(), "no document");
        assert_eq!(calls, 3);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let panel = build(FakeMedia::new(), MetConfig::new());
        let bogus = WidgetId(999);
        assert!(!panel.refresh(bogus));
        assert_eq!(panel.click(bogus), None);
        assert!(panel.widget(bogus).is_none());
    }
}

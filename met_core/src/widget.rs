// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget kinds and their behavior.
//!
//! Each control on the panel is a [`WidgetKind`]. A kind fully determines:
//!
//! - what a click does ([`WidgetKind::click`]),
//! - how the widget looks for a given media state ([`WidgetKind::view`]),
//! - which native events make that look stale ([`WidgetKind::subscriptions`]).
//!
//! Views are recomputed from the media element on every refresh and never
//! cached, so a refresh is always idempotent.

use alloc::format;
use alloc::string::String;

use crate::config::MetConfig;
use crate::media::{MediaAttribute, MediaElement, MediaEvent};

/// DOM element used for a widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementTag {
    /// A `<button>`.
    #[default]
    Button,
    /// A `<span>`.
    Span,
}

impl ElementTag {
    /// Returns the tag name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Span => "span",
        }
    }
}

/// Every control and indicator the panel can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Static label at the head of a compact panel.
    Dropdown,
    /// Logo that pins and unpins the panel.
    Pin,
    /// Playback rate, two decimal places.
    RateIndicator,
    /// Configuration button; currently inert.
    Config,
    /// Removes the panel from the document.
    Close,
    /// Moves `currentTime` back by the seek step.
    SeekBack,
    /// Lowers `playbackRate` by the rate increment.
    SpeedDown,
    /// Plays when paused, pauses when playing.
    PlayPause,
    /// Raises `playbackRate` by the rate increment.
    SpeedUp,
    /// Moves `currentTime` forward by the seek step.
    SeekForward,
    /// Toggles the `controls` attribute and clears `controlslist`.
    NativeControls,
    /// Toggles the `loop` attribute.
    Loop,
    /// Flips `muted`.
    Mute,
    /// Flips `preservesPitch`.
    PreservePitch,
    /// Info button; currently inert.
    Info,
}

/// A panel-level effect requested by a click.
///
/// The panel and its DOM node belong to the backend, so these are returned to
/// the caller rather than applied here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelAction {
    /// Flip the panel's pinned state.
    TogglePin,
    /// Remove the panel from the document.
    Close,
}

/// What a click asked the caller to do besides mutating the media element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClickOutcome {
    /// The clicked widget must refresh now, because no native event will
    /// report the change.
    pub refresh_self: bool,
    /// Panel-level effect to apply.
    pub panel: Option<PanelAction>,
}

impl ClickOutcome {
    const NONE: Self = Self {
        refresh_self: false,
        panel: None,
    };

    const REFRESH: Self = Self {
        refresh_self: true,
        panel: None,
    };

    const fn panel(action: PanelAction) -> Self {
        Self {
            refresh_self: false,
            panel: Some(action),
        }
    }
}

/// The visible state of a widget.
///
/// `None` fields are left untouched by a refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetView {
    /// Text content.
    pub label: Option<String>,
    /// Whether the "on" highlight class is present.
    pub on: Option<bool>,
}

impl WidgetKind {
    /// Returns the element the widget is rendered as.
    #[must_use]
    pub const fn tag(self) -> ElementTag {
        match self {
            Self::Dropdown | Self::Pin | Self::RateIndicator | Self::Config | Self::Close => {
                ElementTag::Span
            }
            _ => ElementTag::Button,
        }
    }

    /// Returns the native events after which the widget must refresh.
    #[must_use]
    pub const fn subscriptions(self) -> &'static [MediaEvent] {
        match self {
            Self::PlayPause => &[MediaEvent::Pause, MediaEvent::Play],
            Self::RateIndicator => &[MediaEvent::RateChange],
            Self::Mute => &[MediaEvent::VolumeChange],
            _ => &[],
        }
    }

    /// Returns whether the widget has a view that depends on media state.
    #[must_use]
    pub const fn is_stateful(self) -> bool {
        matches!(
            self,
            Self::RateIndicator
                | Self::PlayPause
                | Self::NativeControls
                | Self::Loop
                | Self::Mute
                | Self::PreservePitch
        )
    }

    /// Returns the label shown before the first refresh.
    #[must_use]
    pub fn initial_label(self, config: &MetConfig) -> &str {
        let s = &config.symbols;
        match self {
            Self::Dropdown => &s.dropdown,
            Self::Pin => &s.logo,
            Self::RateIndicator => "1.00",
            Self::Config => &s.config,
            Self::Close => &s.close,
            Self::SeekBack => &s.seek_back,
            Self::SpeedDown => &s.speed_down,
            Self::PlayPause => &s.play,
            Self::SpeedUp => &s.speed_up,
            Self::SeekForward => &s.seek_forward,
            Self::NativeControls => &s.controls,
            Self::Loop => &s.r#loop,
            Self::Mute => &s.mute,
            Self::PreservePitch => &s.pitch,
            Self::Info => &s.info,
        }
    }

    /// Returns the extra class the widget carries, if any.
    #[must_use]
    pub fn class<'a>(self, config: &'a MetConfig) -> Option<&'a str> {
        match self {
            Self::RateIndicator => Some(&config.classes.indicator),
            Self::Dropdown => Some(&config.classes.dropdown),
            _ => None,
        }
    }

    /// Applies the click effect to `media`.
    ///
    /// Seek and rate steps are not clamped.
    pub fn click(self, media: &impl MediaElement, config: &MetConfig) -> ClickOutcome {
        match self {
            Self::Pin => ClickOutcome::panel(PanelAction::TogglePin),
            Self::Close => ClickOutcome::panel(PanelAction::Close),
            Self::SeekBack => {
                media.set_current_time(media.current_time() - config.seek_step);
                ClickOutcome::NONE
            }
            Self::SeekForward => {
                media.set_current_time(media.current_time() + config.seek_step);
                ClickOutcome::NONE
            }
            Self::SpeedDown => {
                media.set_playback_rate(media.playback_rate() - config.rate_increment);
                ClickOutcome::NONE
            }
            Self::SpeedUp => {
                media.set_playback_rate(media.playback_rate() + config.rate_increment);
                ClickOutcome::NONE
            }
            Self::PlayPause => {
                if media.paused() {
                    media.play();
                } else {
                    media.pause();
                }
                ClickOutcome::NONE
            }
            Self::NativeControls => {
                media.toggle_attribute(MediaAttribute::Controls);
                media.remove_attribute(MediaAttribute::ControlsList);
                ClickOutcome::REFRESH
            }
            Self::Loop => {
                media.toggle_attribute(MediaAttribute::Loop);
                ClickOutcome::REFRESH
            }
            Self::Mute => {
                media.set_muted(!media.muted());
                ClickOutcome::NONE
            }
            Self::PreservePitch => {
                media.set_preserves_pitch(!media.preserves_pitch());
                ClickOutcome::REFRESH
            }
            Self::Dropdown | Self::RateIndicator | Self::Config | Self::Info => {
                ClickOutcome::NONE
            }
        }
    }

    /// Computes the widget's visible state from the current media state.
    ///
    /// Returns `None` for widgets whose look never changes (and for
    /// [`WidgetKind::Pin`], whose look follows the panel instead; see
    /// [`pin_view`]).
    #[must_use]
    pub fn view(self, media: &impl MediaElement, config: &MetConfig) -> Option<WidgetView> {
        let s = &config.symbols;
        let view = match self {
            Self::RateIndicator => WidgetView {
                label: Some(format_rate(media.playback_rate())),
                on: None,
            },
            Self::PlayPause => WidgetView {
                label: Some(String::from(if media.paused() { &s.play } else { &s.pause })),
                on: None,
            },
            Self::NativeControls => WidgetView {
                label: None,
                on: Some(media.has_attribute(MediaAttribute::Controls)),
            },
            Self::Loop => WidgetView {
                label: None,
                on: Some(media.has_attribute(MediaAttribute::Loop)),
            },
            Self::Mute => {
                let muted = media.muted();
                WidgetView {
                    label: Some(String::from(if muted { &s.muted } else { &s.mute })),
                    on: Some(!muted),
                }
            }
            Self::PreservePitch => WidgetView {
                label: None,
                on: Some(media.preserves_pitch()),
            },
            _ => return None,
        };
        Some(view)
    }
}

/// Look of the pin widget for a pinned or unpinned panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinView<'a> {
    /// Text content.
    pub label: &'a str,
    /// CSS `line-height`; `None` clears it.
    pub line_height: Option<&'static str>,
}

/// Returns the pin widget's look for the given pinned state.
#[must_use]
pub fn pin_view(pinned: bool, config: &MetConfig) -> PinView<'_> {
    if pinned {
        PinView {
            label: &config.symbols.pinned,
            line_height: Some("80%"),
        }
    } else {
        PinView {
            label: &config.symbols.logo,
            line_height: None,
        }
    }
}

/// Formats a playback rate with exactly two decimal places.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}")
}

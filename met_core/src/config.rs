// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel configuration.
//!
//! [`MetConfig`] is built once at startup and handed to every panel builder.
//! Nothing in the crate reads configuration from global state; backends share
//! one value (typically behind an `Rc`) across all panels they create.
//!
//! With the `serde` feature enabled every field is optional on input, so a
//! host may override only the glyphs or step sizes it cares about.

use alloc::string::{String, ToString as _};
use core::fmt;

/// Glyphs shown on widgets.
///
/// `\u{fe0e}` (variation selector-15) forces the text presentation of glyphs
/// that would otherwise render as emoji.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Symbols {
    /// Logo shown on the pin widget while the panel is unpinned.
    pub logo: String,
    /// Logo replacement while the panel is pinned.
    pub pinned: String,
    /// Static label at the head of a compact panel.
    pub dropdown: String,
    /// Configuration button.
    pub config: String,
    /// Close button.
    pub close: String,
    /// Play/pause button while the media is paused.
    pub play: String,
    /// Play/pause button while the media is playing.
    pub pause: String,
    /// Speed-up button.
    pub speed_up: String,
    /// Speed-down button.
    pub speed_down: String,
    /// Seek-forward button.
    pub seek_forward: String,
    /// Seek-back button.
    pub seek_back: String,
    /// Native controls toggle.
    pub controls: String,
    /// Loop toggle.
    pub r#loop: String,
    /// Mute toggle while audible.
    pub mute: String,
    /// Mute toggle while muted.
    pub muted: String,
    /// Pitch-preservation toggle.
    pub pitch: String,
    /// Info button.
    pub info: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            logo: "\u{26b2}\u{fe0e}".to_string(),
            pinned: "\u{25cf}".to_string(),
            dropdown: "M".to_string(),
            config: "\u{1f6e0}".to_string(),
            close: "\u{2a2f}".to_string(),
            play: "\u{23f5}\u{fe0e}".to_string(),
            pause: "\u{23f8}\u{fe0e}".to_string(),
            speed_up: "\u{203a}".to_string(),
            speed_down: "\u{2039}".to_string(),
            seek_forward: "\u{bb}".to_string(),
            seek_back: "\u{ab}".to_string(),
            controls: "C".to_string(),
            r#loop: "\u{1f501}\u{fe0e}".to_string(),
            mute: "\u{1f50a}\u{fe0e}".to_string(),
            muted: "\u{1f507}\u{fe0e}".to_string(),
            pitch: "~".to_string(),
            info: "\u{2139}".to_string(),
        }
    }
}

/// CSS class names the host stylesheet is expected to define.
///
/// The stylesheet itself is not part of this crate; these names are the
/// contract between the two.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ClassNames {
    /// Wrapper holding the panel and the media element.
    pub container: String,
    /// The floating panel.
    pub panel: String,
    /// Added to the panel while it is pinned.
    pub pinned: String,
    /// Static label at the head of a compact panel.
    pub dropdown: String,
    /// Group that hides until the panel is hovered.
    pub collapse: String,
    /// Playback button group.
    pub playback: String,
    /// Toggle button group.
    pub toggles: String,
    /// Highlight for toggles whose state is active.
    pub on: String,
    /// Playback-rate indicator.
    pub indicator: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "met".to_string(),
            panel: "met-panel".to_string(),
            pinned: "met-panel--pinned".to_string(),
            dropdown: "met-dropdown".to_string(),
            collapse: "met-collapse".to_string(),
            playback: "met-playback".to_string(),
            toggles: "met-toggles".to_string(),
            on: "met-btn--on".to_string(),
            indicator: "met-playback-indicator".to_string(),
        }
    }
}

/// Arrangement of widgets inside the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LayoutVariant {
    /// Rate indicator on top, playback and toggle groups below.
    #[default]
    Grouped,
    /// A single draggable strip with pin, config, and close buttons.
    Compact,
}

/// Complete configuration for every panel created by a backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct MetConfig {
    /// Widget glyphs.
    pub symbols: Symbols,
    /// CSS class contract.
    pub classes: ClassNames,
    /// Playback-rate change per speed-up/speed-down click.
    pub rate_increment: f64,
    /// Seconds moved per seek-back/seek-forward click.
    pub seek_step: f64,
    /// Which layout to build.
    pub layout: LayoutVariant,
    /// Document query selecting the media elements to wrap.
    pub selector: String,
    /// Whether the panel swallows `click`, `dblclick`, and `contextmenu`.
    pub stop_propagation: bool,
    /// Whether the panel can be dragged. `None` follows the layout: only
    /// [`LayoutVariant::Compact`] panels are draggable.
    pub draggable: Option<bool>,
}

impl Default for MetConfig {
    fn default() -> Self {
        Self {
            symbols: Symbols::default(),
            classes: ClassNames::default(),
            rate_increment: 0.1,
            seek_step: 1.0,
            layout: LayoutVariant::Grouped,
            selector: "video".to_string(),
            stop_propagation: true,
            draggable: None,
        }
    }
}

impl MetConfig {
    /// Default configuration: grouped layout over every `<video>`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration using the compact, draggable layout.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            layout: LayoutVariant::Compact,
            ..Self::default()
        }
    }

    /// Returns whether panels built from this configuration are draggable.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
            .unwrap_or(self.layout == LayoutVariant::Compact)
    }

    /// Checks that the numeric steps and selector are usable.
    ///
    /// Steps must be finite and strictly positive; the selector must not be
    /// blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rate_increment.is_finite() && self.rate_increment > 0.0) {
            return Err(ConfigError::RateIncrement(self.rate_increment));
        }
        if !(self.seek_step.is_finite() && self.seek_step > 0.0) {
            return Err(ConfigError::SeekStep(self.seek_step));
        }
        if self.selector.trim().is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        Ok(())
    }
}

/// Errors from [`MetConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `rate_increment` is zero, negative, or not finite.
    RateIncrement(f64),
    /// `seek_step` is zero, negative, or not finite.
    SeekStep(f64),
    /// `selector` is blank.
    EmptySelector,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateIncrement(v) => {
                write!(f, "rate increment must be finite and positive (got {v})")
            }
            Self::SeekStep(v) => write!(f, "seek step must be finite and positive (got {v})"),
            Self::EmptySelector => f.write_str("media selector is empty"),
        }
    }
}

impl core::error::Error for ConfigError {}

// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media element contract.
//!
//! The panel never owns the media element it controls. Backends wrap the
//! platform object (an `HTMLMediaElement` on the web) and implement
//! [`MediaElement`] over it; everything in this crate reads and writes media
//! state only through that trait.
//!
//! All methods take `&self`: the underlying element is shared with the host
//! page, which may change it at any time, so there is no exclusive access to
//! model. Test doubles use interior mutability for the same reason.

use core::fmt;

/// A native event fired by the media element.
///
/// Only the events a widget can subscribe to are listed. Each of them means
/// "some state a widget displays may have changed", whether the change came
/// from the panel, the page, or the browser's own controls.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MediaEvent {
    /// Playback started or resumed.
    Play,
    /// Playback paused.
    Pause,
    /// `playbackRate` changed.
    RateChange,
    /// `volume` or `muted` changed.
    VolumeChange,
}

impl MediaEvent {
    /// Every event, in declaration order.
    pub const ALL: [Self; 4] = [Self::Play, Self::Pause, Self::RateChange, Self::VolumeChange];

    /// Returns the DOM event type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::RateChange => "ratechange",
            Self::VolumeChange => "volumechange",
        }
    }

    /// Parses a DOM event type name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }
}

impl fmt::Debug for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaEvent({})", self.name())
    }
}

/// A boolean content attribute on the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaAttribute {
    /// `controls`: show the browser's native controls.
    Controls,
    /// `loop`: restart at the end.
    Loop,
    /// `controlslist`: restrictions on the native controls (e.g.
    /// `nodownload`). Only ever removed.
    ControlsList,
}

impl MediaAttribute {
    /// Returns the attribute name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Controls => "controls",
            Self::Loop => "loop",
            Self::ControlsList => "controlslist",
        }
    }
}

/// Read/write access to a media element's playback state.
///
/// No method validates its input. Writing a negative time or rate is passed
/// straight through; what happens next is up to the implementation (a browser
/// may clamp, throw, or accept it).
pub trait MediaElement {
    /// Returns whether playback is paused.
    fn paused(&self) -> bool;

    /// Starts or resumes playback.
    fn play(&self);

    /// Pauses playback.
    fn pause(&self);

    /// Returns the current playback rate.
    fn playback_rate(&self) -> f64;

    /// Sets the playback rate.
    fn set_playback_rate(&self, rate: f64);

    /// Returns the current position in seconds.
    fn current_time(&self) -> f64;

    /// Sets the current position in seconds.
    fn set_current_time(&self, seconds: f64);

    /// Returns whether audio is muted.
    fn muted(&self) -> bool;

    /// Mutes or unmutes audio.
    fn set_muted(&self, muted: bool);

    /// Returns whether pitch is preserved when the rate changes.
    fn preserves_pitch(&self) -> bool;

    /// Sets whether pitch is preserved when the rate changes.
    fn set_preserves_pitch(&self, preserve: bool);

    /// Returns whether the attribute is present.
    fn has_attribute(&self, attr: MediaAttribute) -> bool;

    /// Adds the attribute if absent, removes it if present. Returns whether
    /// it is present afterwards.
    fn toggle_attribute(&self, attr: MediaAttribute) -> bool;

    /// Removes the attribute if present.
    fn remove_attribute(&self, attr: MediaAttribute);
}

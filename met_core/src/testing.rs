// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles for the media and surface contracts.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::media::{MediaAttribute, MediaElement, MediaEvent};
use crate::panel::WidgetSurface;

/// In-memory media element.
///
/// Starts paused at rate 1.0, time 0, unmuted, pitch preserved, with no
/// attributes. Mutations that a browser would report with a native event
/// queue that event; tests deliver them with [`take_events`](Self::take_events).
#[derive(Debug)]
pub(crate) struct FakeMedia {
    paused: Cell<bool>,
    rate: Cell<f64>,
    time: Cell<f64>,
    muted: Cell<bool>,
    preserves_pitch: Cell<bool>,
    attrs: RefCell<Vec<MediaAttribute>>,
    events: RefCell<Vec<MediaEvent>>,
    writes: Cell<u32>,
}

impl FakeMedia {
    pub(crate) fn new() -> Self {
        Self {
            paused: Cell::new(true),
            rate: Cell::new(1.0),
            time: Cell::new(0.0),
            muted: Cell::new(false),
            preserves_pitch: Cell::new(true),
            attrs: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
            writes: Cell::new(0),
        }
    }

    /// Adds an attribute without counting it as a write.
    pub(crate) fn set_attribute(&self, attr: MediaAttribute) {
        let mut attrs = self.attrs.borrow_mut();
        if !attrs.contains(&attr) {
            attrs.push(attr);
        }
    }

    /// Drains queued native events.
    pub(crate) fn take_events(&self) -> Vec<MediaEvent> {
        core::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of state-changing calls made through [`MediaElement`].
    pub(crate) fn writes(&self) -> u32 {
        self.writes.get()
    }

    fn write(&self, event: Option<MediaEvent>) {
        self.writes.set(self.writes.get() + 1);
        if let Some(event) = event {
            self.events.borrow_mut().push(event);
        }
    }
}

impl MediaElement for FakeMedia {
    fn paused(&self) -> bool {
        self.paused.get()
    }

    fn play(&self) {
        self.paused.set(false);
        self.write(Some(MediaEvent::Play));
    }

    fn pause(&self) {
        self.paused.set(true);
        self.write(Some(MediaEvent::Pause));
    }

    fn playback_rate(&self) -> f64 {
        self.rate.get()
    }

    fn set_playback_rate(&self, rate: f64) {
        self.rate.set(rate);
        self.write(Some(MediaEvent::RateChange));
    }

    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.time.set(seconds);
        self.write(None);
    }

    fn muted(&self) -> bool {
        self.muted.get()
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
        self.write(Some(MediaEvent::VolumeChange));
    }

    fn preserves_pitch(&self) -> bool {
        self.preserves_pitch.get()
    }

    fn set_preserves_pitch(&self, preserve: bool) {
        self.preserves_pitch.set(preserve);
        self.write(None);
    }

    fn has_attribute(&self, attr: MediaAttribute) -> bool {
        self.attrs.borrow().contains(&attr)
    }

    fn toggle_attribute(&self, attr: MediaAttribute) -> bool {
        self.write(None);
        let mut attrs = self.attrs.borrow_mut();
        if let Some(pos) = attrs.iter().position(|a| *a == attr) {
            attrs.remove(pos);
            false
        } else {
            attrs.push(attr);
            true
        }
    }

    fn remove_attribute(&self, attr: MediaAttribute) {
        self.write(None);
        self.attrs.borrow_mut().retain(|a| *a != attr);
    }
}

/// Everything a [`FakeSurface`] has been told to show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SurfaceSnapshot {
    pub(crate) label: String,
    pub(crate) classes: Vec<String>,
    pub(crate) line_height: Option<String>,
}

/// Records the state written to a widget.
#[derive(Debug, Default)]
pub(crate) struct FakeSurface {
    state: RefCell<SurfaceSnapshot>,
}

impl FakeSurface {
    pub(crate) fn label(&self) -> String {
        self.state.borrow().label.clone()
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    pub(crate) fn line_height(&self) -> Option<String> {
        self.state.borrow().line_height.clone()
    }

    pub(crate) fn snapshot(&self) -> SurfaceSnapshot {
        self.state.borrow().clone()
    }
}

impl WidgetSurface for FakeSurface {
    fn set_label(&self, label: &str) {
        self.state.borrow_mut().label = String::from(label);
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut state = self.state.borrow_mut();
        state.classes.retain(|c| c != class);
        if present {
            state.classes.push(String::from(class));
        }
    }

    fn set_line_height(&self, value: Option<&str>) {
        self.state.borrow_mut().line_height = value.map(String::from);
    }
}

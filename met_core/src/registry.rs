// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native-event fan-out.
//!
//! A [`RefreshRegistry`] maps each [`MediaEvent`] to the ordered list of
//! handles that must repaint when it fires. Backends attach exactly one native
//! listener per entry in [`events`](RefreshRegistry::events) and forward each
//! firing to [`notify`](RefreshRegistry::notify), so N widgets interested in
//! the same event never cost N native listeners.
//!
//! The registry is filled during panel construction and only read afterwards.

use alloc::vec::Vec;

use crate::media::MediaEvent;

/// Per-element mapping from native event to subscribed handles.
///
/// Events are kept in first-subscription order; handles within an event are
/// kept in subscription order.
#[derive(Clone, Debug)]
pub struct RefreshRegistry<H> {
    entries: Vec<(MediaEvent, Vec<H>)>,
}

impl<H> Default for RefreshRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RefreshRegistry<H> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `handle` to the subscribers of `event`.
    ///
    /// Subscribing the same handle twice to one event delivers two
    /// notifications per firing; callers subscribe each handle once.
    pub fn subscribe(&mut self, event: MediaEvent, handle: H) {
        match self.entries.iter_mut().find(|(e, _)| *e == event) {
            Some((_, handles)) => handles.push(handle),
            None => self.entries.push((event, alloc::vec![handle])),
        }
    }

    /// Returns the distinct events with at least one subscriber.
    pub fn events(&self) -> impl Iterator<Item = MediaEvent> + '_ {
        self.entries.iter().map(|(event, _)| *event)
    }

    /// Returns the subscribers of `event` in subscription order.
    #[must_use]
    pub fn subscribers(&self, event: MediaEvent) -> &[H] {
        match self.entries.iter().find(|(e, _)| *e == event) {
            Some((_, handles)) => handles,
            None => &[],
        }
    }

    /// Calls `f` for every subscriber of `event`, in subscription order.
    ///
    /// Returns the number of subscribers notified.
    pub fn notify(&self, event: MediaEvent, mut f: impl FnMut(&H)) -> usize {
        let handles = self.subscribers(event);
        for handle in handles {
            f(handle);
        }
        handles.len()
    }

    /// Returns `true` if no event has a subscriber.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

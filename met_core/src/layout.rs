// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel layouts.
//!
//! A [`PanelLayout`] is an ordered list of [`WidgetGroup`]s. The group's
//! [`GroupRole`] tells the backend where its widgets go:
//!
//! ```text
//!   container
//!   ├── panel
//!   │   ├── Header widgets
//!   │   └── collapse
//!   │       ├── Collapse widgets
//!   │       ├── playback group ── Playback widgets
//!   │       └── toggles group  ── Toggles widgets
//!   └── media element
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::config::{ClassNames, LayoutVariant};
use crate::widget::WidgetKind;

/// Where a group's widgets are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupRole {
    /// Direct children of the panel, always visible.
    Header,
    /// Direct children of the collapse node.
    Collapse,
    /// Children of a playback group inside the collapse node.
    Playback,
    /// Children of a toggle group inside the collapse node.
    Toggles,
}

impl GroupRole {
    /// Returns the class of the wrapper node for this group, if it has one.
    ///
    /// Header and collapse widgets are appended to existing nodes and have no
    /// wrapper of their own.
    #[must_use]
    pub fn wrapper_class(self, classes: &ClassNames) -> Option<&str> {
        match self {
            Self::Header | Self::Collapse => None,
            Self::Playback => Some(&classes.playback),
            Self::Toggles => Some(&classes.toggles),
        }
    }
}

/// An ordered run of widgets sharing a placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetGroup {
    /// Placement of the widgets.
    pub role: GroupRole,
    /// Widgets in display order.
    pub widgets: Vec<WidgetKind>,
}

/// Widget arrangement for one panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelLayout {
    /// Groups in construction order.
    pub groups: Vec<WidgetGroup>,
}

const PLAYBACK: [WidgetKind; 5] = [
    WidgetKind::SeekBack,
    WidgetKind::SpeedDown,
    WidgetKind::PlayPause,
    WidgetKind::SpeedUp,
    WidgetKind::SeekForward,
];

const TOGGLES: [WidgetKind; 5] = [
    WidgetKind::NativeControls,
    WidgetKind::Loop,
    WidgetKind::Mute,
    WidgetKind::PreservePitch,
    WidgetKind::Info,
];

impl PanelLayout {
    /// Returns the layout for `variant`.
    #[must_use]
    pub fn for_variant(variant: LayoutVariant) -> Self {
        match variant {
            LayoutVariant::Grouped => Self::grouped(),
            LayoutVariant::Compact => Self::compact(),
        }
    }

    /// Rate indicator in the header; playback and toggle groups below.
    #[must_use]
    pub fn grouped() -> Self {
        Self {
            groups: vec![
                WidgetGroup {
                    role: GroupRole::Header,
                    widgets: vec![WidgetKind::RateIndicator],
                },
                WidgetGroup {
                    role: GroupRole::Playback,
                    widgets: PLAYBACK.to_vec(),
                },
                WidgetGroup {
                    role: GroupRole::Toggles,
                    widgets: TOGGLES.to_vec(),
                },
            ],
        }
    }

    /// A dropdown label in the header; every other widget in one strip.
    #[must_use]
    pub fn compact() -> Self {
        let mut strip = vec![
            WidgetKind::Pin,
            WidgetKind::RateIndicator,
            WidgetKind::Config,
            WidgetKind::Close,
        ];
        strip.extend(PLAYBACK);
        strip.extend(TOGGLES);
        Self {
            groups: vec![
                WidgetGroup {
                    role: GroupRole::Header,
                    widgets: vec![WidgetKind::Dropdown],
                },
                WidgetGroup {
                    role: GroupRole::Collapse,
                    widgets: strip,
                },
            ],
        }
    }

    /// Iterates over every widget kind in construction order.
    pub fn kinds(&self) -> impl Iterator<Item = WidgetKind> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.widgets.iter().copied())
    }

    /// Returns the total number of widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.widgets.len()).sum()
    }

    /// Returns `true` if the layout has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_matches_playback_then_toggles() {
        let layout = PanelLayout::grouped();
        let roles: Vec<_> = layout.groups.iter().map(|g| g.role).collect();
        assert_eq!(
            roles,
            [GroupRole::Header, GroupRole::Playback, GroupRole::Toggles]
        );
        assert_eq!(layout.len(), 11);
        assert_eq!(layout.kinds().nth(3), Some(WidgetKind::PlayPause));
    }

    #[test]
    fn compact_has_panel_buttons() {
        let layout = PanelLayout::compact();
        let kinds: Vec<_> = layout.kinds().collect();
        assert_eq!(kinds.first(), Some(&WidgetKind::Dropdown));
        assert!(kinds.contains(&WidgetKind::Pin));
        assert!(kinds.contains(&WidgetKind::Close));
        assert_eq!(kinds.len(), 15);
    }

    #[test]
    fn wrapper_classes() {
        let classes = ClassNames::default();
        assert_eq!(GroupRole::Header.wrapper_class(&classes), None);
        assert_eq!(
            GroupRole::Playback.wrapper_class(&classes),
            Some("met-playback")
        );
        assert_eq!(
            GroupRole::Toggles.wrapper_class(&classes),
            Some("met-toggles")
        );
    }

    #[test]
    fn variant_selects_layout() {
        assert_eq!(
            PanelLayout::for_variant(LayoutVariant::Compact),
            PanelLayout::compact()
        );
        assert!(!PanelLayout::grouped().is_empty());
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview state machine — single view vs. side-by-side compare.
//
// Transitions are pure: each takes the state by value and returns the next
// one, so the UI holds a single `ViewState` and replaces it on every event.

use crate::filter::FilterKind;

/// What the preview area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One image rendered through `filter`.
    Single { filter: FilterKind },
    /// Normal view on the left, `secondary` on the right.
    Compare { secondary: FilterKind },
}

/// Ephemeral UI state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    dark_mode: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ViewState {
    /// Single view with the normal filter.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            mode: ViewMode::Single {
                filter: FilterKind::Normal,
            },
            dark_mode,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_comparing(&self) -> bool {
        matches!(self.mode, ViewMode::Compare { .. })
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Filter of the main (or left-hand) image. Always normal while comparing.
    pub fn primary_filter(&self) -> FilterKind {
        match self.mode {
            ViewMode::Single { filter } => filter,
            ViewMode::Compare { .. } => FilterKind::Normal,
        }
    }

    /// Filter of the right-hand image, if comparing.
    pub fn secondary_filter(&self) -> Option<FilterKind> {
        match self.mode {
            ViewMode::Single { .. } => None,
            ViewMode::Compare { secondary } => Some(secondary),
        }
    }

    /// The filter the sidebar should highlight.
    pub fn selected_filter(&self) -> FilterKind {
        match self.mode {
            ViewMode::Single { filter } => filter,
            ViewMode::Compare { secondary } => secondary,
        }
    }

    /// Choose a filter. While comparing this changes the right-hand image only.
    pub fn select_filter(self, filter: FilterKind) -> Self {
        let mode = match self.mode {
            ViewMode::Single { .. } => ViewMode::Single { filter },
            ViewMode::Compare { .. } => ViewMode::Compare { secondary: filter },
        };
        Self { mode, ..self }
    }

    /// Enter or leave compare mode.
    ///
    /// Entering captures the current filter as the secondary view and shows
    /// normal on the left. Leaving restores the secondary filter as the single
    /// view, so toggling twice without selecting anything is a no-op.
    pub fn toggle_compare(self) -> Self {
        let mode = match self.mode {
            ViewMode::Single { filter } => ViewMode::Compare { secondary: filter },
            ViewMode::Compare { secondary } => ViewMode::Single { filter: secondary },
        };
        Self { mode, ..self }
    }

    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_single_normal() {
        let state = ViewState::default();
        assert_eq!(state.primary_filter(), FilterKind::Normal);
        assert!(!state.is_comparing());
        assert!(!state.dark_mode());
    }

    #[test]
    fn entering_compare_captures_filter_and_resets_primary() {
        let state = ViewState::default()
            .select_filter(FilterKind::Tritanopia)
            .toggle_compare();
        assert!(state.is_comparing());
        assert_eq!(state.primary_filter(), FilterKind::Normal);
        assert_eq!(state.secondary_filter(), Some(FilterKind::Tritanopia));
    }

    #[test]
    fn compare_round_trip_restores_selection() {
        for kind in FilterKind::ALL {
            let before = ViewState::default().select_filter(kind);
            let after = before.toggle_compare().toggle_compare();
            assert_eq!(after, before);
            assert_eq!(after.primary_filter(), kind);
        }
    }

    #[test]
    fn selecting_while_comparing_moves_secondary() {
        let state = ViewState::default()
            .toggle_compare()
            .select_filter(FilterKind::Achromatopsia);
        assert_eq!(state.primary_filter(), FilterKind::Normal);
        assert_eq!(state.selected_filter(), FilterKind::Achromatopsia);

        let single = state.toggle_compare();
        assert_eq!(
            single.mode(),
            ViewMode::Single {
                filter: FilterKind::Achromatopsia
            }
        );
    }

    #[test]
    fn dark_mode_is_independent_of_view() {
        let state = ViewState::new(true)
            .select_filter(FilterKind::Protanopia)
            .toggle_compare()
            .toggle_dark_mode();
        assert!(!state.dark_mode());
        assert_eq!(state.secondary_filter(), Some(FilterKind::Protanopia));
    }
}

//! UI-only view state: the modal selection store, the color theme, and the
//! derived viewport/scroll predicates. Each flag here has exactly one
//! component responsible for writing it.

use serde::{Deserialize, Serialize};

use crate::content::ProjectRecord;

/// Tailwind's `md` breakpoint. Anything narrower renders the small-device
/// layout variants.
pub const SMALL_DEVICE_MAX_WIDTH: f64 = 768.0;

/// Vertical scroll offset past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// How long each skills-carousel slide is shown before auto-advancing.
pub const CAROUSEL_INTERVAL_MS: u64 = 2500;

pub fn is_small_device(viewport_width: f64) -> bool {
    viewport_width < SMALL_DEVICE_MAX_WIDTH
}

pub fn shows_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Number of carousel slides visible at the given viewport width.
pub fn slides_per_view(viewport_width: f64) -> usize {
    if viewport_width < 640.0 {
        1
    } else if viewport_width < 1024.0 {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggled().as_str())
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

/// Which project detail overlay is showing, if any. The modal can only be
/// open with a selection present; closing clears both together, and opening
/// over an existing selection replaces it rather than stacking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<ProjectRecord>,
    modal_open: bool,
}

impl SelectionState {
    pub fn open(&mut self, project: ProjectRecord) {
        self.selected = Some(project);
        self.modal_open = true;
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.modal_open = false;
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    /// The project to render in the overlay, present only while the modal is
    /// open.
    pub fn active(&self) -> Option<&ProjectRecord> {
        if self.modal_open {
            self.selected.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WORK_PROJECTS;

    #[test]
    fn small_device_boundary_in_both_directions() {
        assert!(is_small_device(767.0));
        assert!(is_small_device(767.99));
        assert!(!is_small_device(768.0));
        assert!(!is_small_device(1280.0));
    }

    #[test]
    fn scroll_top_control_appears_past_threshold() {
        assert!(!shows_scroll_top(0.0));
        assert!(!shows_scroll_top(300.0));
        assert!(shows_scroll_top(300.01));
        assert!(shows_scroll_top(4000.0));
    }

    #[test]
    fn slides_per_view_tracks_breakpoints() {
        assert_eq!(slides_per_view(375.0), 1);
        assert_eq!(slides_per_view(640.0), 2);
        assert_eq!(slides_per_view(1023.0), 2);
        assert_eq!(slides_per_view(1024.0), 3);
    }

    #[test]
    fn theme_round_trips_through_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn modal_open_implies_selection() {
        let mut state = SelectionState::default();
        assert!(!state.is_open());
        assert!(state.active().is_none());

        state.open(WORK_PROJECTS[0].clone());
        assert!(state.is_open());
        assert_eq!(state.active().map(|p| p.title), Some(WORK_PROJECTS[0].title));
    }

    #[test]
    fn close_clears_selection_and_flag_together() {
        let mut state = SelectionState::default();
        state.open(WORK_PROJECTS[0].clone());
        state.close();
        assert!(!state.is_open());
        assert!(state.active().is_none());
        assert_eq!(state, SelectionState::default());

        // Closing an already-closed state is a no-op.
        state.close();
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn reopening_replaces_the_selection() {
        let mut state = SelectionState::default();
        state.open(WORK_PROJECTS[0].clone());
        state.open(WORK_PROJECTS[1].clone());
        assert!(state.is_open());
        assert_eq!(state.active().map(|p| p.title), Some(WORK_PROJECTS[1].title));
    }
}

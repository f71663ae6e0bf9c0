//! View state
//!
//! The page has two views, the entry list and the dashboard. Charts are
//! built the first time the dashboard is shown and reused afterwards.

use serde::{Deserialize, Serialize};

use crate::filter::{FilterState, FilterToken};

/// Which view is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Main,
    Dashboard,
}

/// What the caller must do after entering the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardInit {
    /// First entry on this page load: build the charts now
    Build,
    /// Charts already exist
    Ready,
}

/// Two-view toggle with the "charts already rendered" guard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    dashboard_rendered: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn dashboard_rendered(&self) -> bool {
        self.dashboard_rendered
    }

    /// Main → Dashboard. Returns [`DashboardInit::Build`] exactly once.
    pub fn show_dashboard(&mut self) -> DashboardInit {
        self.mode = ViewMode::Dashboard;
        if self.dashboard_rendered {
            DashboardInit::Ready
        } else {
            self.dashboard_rendered = true;
            tracing::debug!("dashboard entered for the first time");
            DashboardInit::Build
        }
    }

    /// Dashboard → Main
    pub fn show_main(&mut self) {
        self.mode = ViewMode::Main;
    }

    /// Flip to the other view
    pub fn toggle(&mut self) -> Option<DashboardInit> {
        match self.mode {
            ViewMode::Main => Some(self.show_dashboard()),
            ViewMode::Dashboard => {
                self.show_main();
                None
            }
        }
    }
}

/// Interactive state of one page load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: ViewState,
    pub filter: FilterState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a filter; the list view is brought back if the dashboard was open
    pub fn select_filter(&mut self, token: FilterToken) {
        self.filter.select(token);
        self.view.show_main();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_main() {
        let state = ViewState::new();
        assert_eq!(state.mode(), ViewMode::Main);
        assert!(!state.dashboard_rendered());
    }

    #[test]
    fn test_dashboard_built_once() {
        let mut state = ViewState::new();

        assert_eq!(state.show_dashboard(), DashboardInit::Build);
        assert_eq!(state.mode(), ViewMode::Dashboard);

        state.show_main();
        assert_eq!(state.mode(), ViewMode::Main);

        assert_eq!(state.show_dashboard(), DashboardInit::Ready);
        assert_eq!(state.show_dashboard(), DashboardInit::Ready);
        assert!(state.dashboard_rendered());
    }

    #[test]
    fn test_toggle() {
        let mut state = ViewState::new();
        assert_eq!(state.toggle(), Some(DashboardInit::Build));
        assert_eq!(state.toggle(), None);
        assert_eq!(state.mode(), ViewMode::Main);
        assert_eq!(state.toggle(), Some(DashboardInit::Ready));
    }

    #[test]
    fn test_selecting_filter_returns_to_list() {
        let mut app = AppState::new();
        app.view.show_dashboard();
        app.select_filter(FilterToken::tag("salud"));

        assert_eq!(app.view.mode(), ViewMode::Main);
        assert!(app.filter.is_active("salud"));
        assert!(app.view.dashboard_rendered());
    }
}

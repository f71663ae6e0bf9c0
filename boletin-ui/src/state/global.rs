//! Global Application State
//!
//! Reactive state management using Leptos signals. Filter and view
//! transitions go through the core `AppState` so the browser and the static
//! page share one set of rules.

use boletin::date::{offset_from_hours, today_at, DEFAULT_UTC_OFFSET_HOURS};
use boletin::feed::{Feed, FeedError};
use boletin::filter::{ActiveFilterIndicator, FilterToken};
use boletin::page::{PageModel, DEFAULT_TITLE};
use boletin::tags::TagSet;
use boletin::view::{AppState, DashboardInit, ViewMode};
use leptos::*;
use wasm_bindgen::JsCast;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Everything rendered from the feed, once loaded
    pub page: RwSignal<Option<PageModel>>,
    /// Fetch in flight
    pub loading: RwSignal<bool>,
    /// Static message replacing the list when the load failed
    pub error: RwSignal<Option<String>>,
    /// Active filter and current view
    pub app: RwSignal<AppState>,
    /// Group whose accordion panel is open
    pub open_group: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        page: create_rw_signal(None),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
        app: create_rw_signal(AppState::new()),
        open_group: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Store the loaded feed as a page model
    pub fn set_feed(&self, feed: &Feed) {
        let today = today_at(
            chrono::Utc::now(),
            offset_from_hours(DEFAULT_UTC_OFFSET_HOURS),
        );
        self.page
            .set(Some(PageModel::from_feed(feed, DEFAULT_TITLE, today)));
        self.loading.set(false);
    }

    /// Record a failed load; logged once here
    pub fn set_load_error(&self, err: &FeedError) {
        web_sys::console::error_1(&format!("Error al cargar los datos: {}", err).into());
        self.error.set(Some(err.user_message().to_string()));
        self.loading.set(false);
    }

    /// Current view
    pub fn mode(&self) -> ViewMode {
        self.app.with(|app| app.view.mode())
    }

    /// True once the dashboard has been built; it stays mounted afterwards
    pub fn dashboard_rendered(&self) -> bool {
        self.app.with(|app| app.view.dashboard_rendered())
    }

    pub fn show_main(&self) {
        self.app.update(|app| app.view.show_main());
    }

    pub fn show_dashboard(&self) {
        let mut init = DashboardInit::Ready;
        self.app.update(|app| init = app.view.show_dashboard());
        if init == DashboardInit::Build {
            web_sys::console::log_1(&"Construyendo dashboard".into());
        }
    }

    /// Select a filter, return to the list and scroll to it
    pub fn select_filter(&self, token: &str) {
        self.app
            .update(|app| app.select_filter(FilterToken::parse(token)));
        scroll_to_list();
    }

    /// Is `token` the active filter
    pub fn is_active(&self, token: &str) -> bool {
        self.app.with(|app| app.filter.is_active(token))
    }

    /// Does a card with `tags` pass the active filter
    pub fn is_visible(&self, tags: &TagSet) -> bool {
        self.app.with(|app| app.filter.visible(tags))
    }

    /// Indicator for the active filter, if any
    pub fn indicator(&self) -> Option<ActiveFilterIndicator> {
        let filter = self.app.with(|app| app.filter.clone());
        self.page
            .with(|page| page.as_ref().and_then(|p| p.indicator(&filter)))
    }

    /// Open `slug`'s panel and close the rest; clicking the open one closes it
    pub fn toggle_group(&self, slug: &str) {
        self.open_group.update(|open| {
            *open = if open.as_deref() == Some(slug) {
                None
            } else {
                Some(slug.to_string())
            };
        });
    }
}

/// Scroll so the list starts just below the sticky header
fn scroll_to_list() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(Some(separator)) = document.query_selector(".separator") else {
        return;
    };

    let header_height = document
        .get_element_by_id("page-header")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let top = separator.get_bounding_client_rect().top() + scroll_y - header_height - 16.0;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

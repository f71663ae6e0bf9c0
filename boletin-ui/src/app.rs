//! App Root Component
//!
//! Loads the feed once at startup and switches between the list and the
//! dashboard.

use boletin::render::assets::INLINE_CSS;
use boletin::view::ViewMode;
use leptos::*;

use crate::api;
use crate::components::{Header, LoadError, Loading, ScrollTop};
use crate::pages::{Dashboard, MainView};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = expect_context::<GlobalState>();

    spawn_local(async move {
        match api::fetch_feed().await {
            Ok(feed) => state.set_feed(&feed),
            Err(err) => state.set_load_error(&err),
        }
    });

    view! {
        <style>{INLINE_CSS}</style>
        <Header />
        <main id="page-container">
            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                if let Some(message) = state.error.get() {
                    return view! {
                        <div id="main-view" class="view active">
                            <section id="normas-body">
                                <LoadError message=message />
                            </section>
                        </div>
                    }
                    .into_view();
                }
                match state.page.get() {
                    Some(page) => view! { <Views page=page /> }.into_view(),
                    None => view! { <Loading /> }.into_view(),
                }
            }}
        </main>
        <ScrollTop />
    }
}

/// Both views; only the active one is shown
#[component]
fn Views(page: boletin::page::PageModel) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let dashboard = page.dashboard.clone();

    view! {
        <div id="main-view" class="view" class:active=move || state.mode() == ViewMode::Main>
            <MainView page=page />
        </div>
        <div
            id="dashboard-view"
            class="view"
            class:active=move || state.mode() == ViewMode::Dashboard
        >
            <Show when=move || state.dashboard_rendered()>
                <Dashboard dashboard=dashboard.clone() />
            </Show>
        </div>
    }
}

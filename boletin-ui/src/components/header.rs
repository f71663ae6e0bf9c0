//! Header Component
//!
//! Logo, title, date and the list/dashboard toggle.

use boletin::date::{display_date, iso_date, offset_from_hours, today_at, DEFAULT_UTC_OFFSET_HOURS};
use boletin::page::DEFAULT_TITLE;
use boletin::view::ViewMode;
use leptos::*;

use crate::state::GlobalState;

/// Sticky page header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let logo = move || {
        state
            .page
            .with(|page| page.as_ref().and_then(|p| p.header.logo_url.clone()))
            .map(|src| view! { <img src=src alt="Logo" class="logo-img" /> })
    };

    // Before the feed arrives the date is today's
    let fecha = move || {
        state.page.with(|page| match page {
            Some(p) => (p.header.fecha.clone(), p.header.fecha_iso.clone()),
            None => {
                let today = today_at(
                    chrono::Utc::now(),
                    offset_from_hours(DEFAULT_UTC_OFFSET_HOURS),
                );
                (display_date(None, today), iso_date(None, today))
            }
        })
    };

    view! {
        <header id="page-header">
            <div class="header-logo">{logo}</div>
            <h1 id="app-title">{DEFAULT_TITLE}</h1>
            <time id="header-date" datetime=move || fecha().1>{move || fecha().0}</time>
            <Show when=move || state.page.with(Option::is_some)>
                <NavToggle />
            </Show>
        </header>
    }
}

/// Normas / Dashboard buttons
#[component]
fn NavToggle() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <nav id="main-nav">
            <button
                class="nav-btn"
                class:active=move || state.mode() == ViewMode::Main
                on:click=move |_| state.show_main()
            >
                "Normas"
            </button>
            <button
                class="nav-btn"
                class:active=move || state.mode() == ViewMode::Dashboard
                on:click=move |_| state.show_dashboard()
            >
                "Dashboard"
            </button>
        </nav>
    }
}

//! Main View
//!
//! Synthesis, statistics, filters and the entry list.

use boletin::page::{PageModel, EMPTY_LIST_MESSAGE};
use leptos::*;

use crate::components::{FilterPanel, NormaCard, StatsPanel};

#[component]
pub fn MainView(page: PageModel) -> impl IntoView {
    let sintesis = (!page.sintesis.trim().is_empty()).then(|| {
        view! {
            <section id="sintesis" class="glass-card">
                <h2>"Síntesis del día"</h2>
                <p id="sintesis-texto">{page.sintesis.clone()}</p>
            </section>
        }
    });

    let cards = if page.cards.is_empty() {
        view! { <p class="loading-message">{EMPTY_LIST_MESSAGE}</p> }.into_view()
    } else {
        page.cards
            .into_iter()
            .map(|card| view! { <NormaCard card=card /> })
            .collect_view()
    };

    view! {
        {sintesis}
        <StatsPanel panel=page.stats />
        <FilterPanel groups=page.filters />
        <hr class="separator" />
        <section id="normas-body">{cards}</section>
    }
}

//! Filter Panel
//!
//! Category accordion of tag buttons, the "Limpiar" button and the
//! active-filter indicator.

use boletin::filter::ALL_TOKEN;
use boletin::render::assets::FILTER_ICON;
use boletin::taxonomy::{FilterButton, FilterGroup};
use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn FilterPanel(groups: Vec<FilterGroup>) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <section id="filtros-section">
            <div class="filtros-header">
                <h2><span inner_html=FILTER_ICON></span> " Filtros"</h2>
                <button class="etiqueta-btn" on:click=move |_| state.select_filter(ALL_TOKEN)>
                    "Limpiar"
                </button>
            </div>
            <ActiveFilter />
            <div class="filtros-grupos">
                {groups
                    .into_iter()
                    .map(|group| view! { <Group group=group /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// "Filtrando por X (n de m)"
#[component]
fn ActiveFilter() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    move || {
        state.indicator().map(|indicator| {
            view! {
                <div id="filtro-activo" class="filtro-activo">
                    "Filtrando por " <strong>{indicator.label}</strong> " "
                    <span class="filtro-activo-count">
                        {format!("({} de {})", indicator.visible, indicator.total)}
                    </span>
                </div>
            }
        })
    }
}

/// One accordion panel; at most one is open
#[component]
fn Group(group: FilterGroup) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let slug = group.slug.clone();
    let toggle_slug = group.slug.clone();
    let is_open = move || state.open_group.with(|open| open.as_deref() == Some(slug.as_str()));

    view! {
        <details class="filtro-grupo" data-grupo=group.slug.clone() prop:open=is_open>
            <summary on:click=move |ev| {
                ev.prevent_default();
                state.toggle_group(&toggle_slug);
            }>
                {group.name} " " <span class="grupo-total">{group.total}</span>
            </summary>
            <div class="etiquetas-container">
                {group
                    .buttons
                    .into_iter()
                    .map(|button| view! { <TagButton button=button /> })
                    .collect_view()}
            </div>
        </details>
    }
}

#[component]
fn TagButton(button: FilterButton) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let token = button.token.clone();
    let click_token = button.token.clone();

    view! {
        <button
            class="etiqueta-btn"
            class:active=move || state.is_active(&token)
            data-filtro=button.token
            on:click=move |_| state.select_filter(&click_token)
        >
            {button.label} " " <span class="etiqueta-count">{button.count}</span>
        </button>
    }
}

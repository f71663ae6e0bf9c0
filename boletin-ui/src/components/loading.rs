//! Loading Component

use leptos::*;

/// Placeholder shown while the feed is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! { <p class="loading-message">"Cargando normativas..."</p> }
}

/// Static message replacing the list after a failed load
#[component]
pub fn LoadError(message: String) -> impl IntoView {
    view! { <p class="loading-message error">{message}</p> }
}

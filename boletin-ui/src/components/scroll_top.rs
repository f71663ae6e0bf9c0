//! Scroll-to-top Button

use leptos::*;
use wasm_bindgen::JsCast;

/// Scroll offset used before the filter section exists
const FALLBACK_THRESHOLD: f64 = 400.0;

/// Appears once the filter section has scrolled out of view
#[component]
pub fn ScrollTop() -> impl IntoView {
    let visible = create_rw_signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let window = leptos::window();
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        visible.set(scroll_y > threshold());
    });
    on_cleanup(move || handle.remove());

    let scroll_up = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        leptos::window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <button
            id="scroll-to-top"
            aria-label="Volver arriba"
            class:visible=move || visible.get()
            on:click=scroll_up
        >
            "↑"
        </button>
    }
}

/// Bottom edge of the filter section in page coordinates
fn threshold() -> f64 {
    document()
        .get_element_by_id("filtros-section")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| (el.offset_top() + el.offset_height()) as f64)
        .unwrap_or(FALLBACK_THRESHOLD)
}

//! Dashboard Charts
//!
//! Static charts reuse the core SVG fragments; the word cloud is built here
//! so its words can select filters.

use boletin::dashboard::{BarDatum, CloudWord, DonutSlice, Gauge, Kpi, TreemapTile};
use boletin::render::charts;
use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn KpiTile(kpi: Kpi) -> impl IntoView {
    view! { <div inner_html=charts::kpi_tile(&kpi)></div> }
}

#[component]
pub fn GaugeChart(gauge: Gauge) -> impl IntoView {
    view! { <div inner_html=charts::gauge(&gauge)></div> }
}

#[component]
pub fn VerticalBars(
    id: &'static str,
    title: &'static str,
    bars: Vec<BarDatum>,
) -> impl IntoView {
    view! { <div inner_html=charts::vertical_bars(id, title, &bars)></div> }
}

#[component]
pub fn HorizontalBars(
    id: &'static str,
    title: &'static str,
    bars: Vec<BarDatum>,
) -> impl IntoView {
    view! { <div inner_html=charts::horizontal_bars(id, title, &bars)></div> }
}

#[component]
pub fn DonutChart(
    id: &'static str,
    title: &'static str,
    slices: Vec<DonutSlice>,
) -> impl IntoView {
    view! { <div inner_html=charts::donut(id, title, &slices)></div> }
}

#[component]
pub fn Treemap(
    id: &'static str,
    title: &'static str,
    tiles: Vec<TreemapTile>,
) -> impl IntoView {
    view! { <div inner_html=charts::treemap(id, title, &tiles)></div> }
}

/// Tag cloud; clicking a word filters the list by it
#[component]
pub fn WordCloud(words: Vec<CloudWord>) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    if words.is_empty() {
        return view! {
            <figure class="chart" id="wordcloud-etiquetas">
                <figcaption>"Nube de Etiquetas"</figcaption>
                <p class="chart-empty">"Sin datos"</p>
            </figure>
        };
    }

    view! {
        <figure class="chart" id="wordcloud-etiquetas">
            <figcaption>"Nube de Etiquetas"</figcaption>
            <div class="cloud">
                {words
                    .into_iter()
                    .enumerate()
                    .map(|(idx, word)| {
                        let token = word.token.clone();
                        view! {
                            <button
                                class="cloud-word"
                                data-filtro=word.token
                                title=word.count.to_string()
                                style=format!(
                                    "font-size: {:.1}px; color: {};",
                                    word.font_size,
                                    charts::color(idx)
                                )
                                on:click=move |_| state.select_filter(&token)
                            >
                                {word.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </figure>
    }
}

//! Dashboard Page
//!
//! KPI tiles and charts. Mounted the first time the view is opened and kept
//! afterwards.

use boletin::dashboard::Dashboard as Model;
use leptos::*;

use crate::components::{
    DonutChart, GaugeChart, HorizontalBars, KpiTile, Treemap, VerticalBars, WordCloud,
};

#[component]
pub fn Dashboard(dashboard: Model) -> impl IntoView {
    web_sys::console::log_1(&"Dashboard construido".into());

    view! {
        <section class="kpis">
            {dashboard
                .kpis
                .into_iter()
                .map(|kpi| view! { <KpiTile kpi=kpi /> })
                .collect_view()}
        </section>
        <section class="charts-grid">
            <GaugeChart gauge=dashboard.gauge />
            <VerticalBars
                id="bar-tipo-norma"
                title="Desglose por Tipo de Norma"
                bars=dashboard.tipo_bars
            />
            <DonutChart
                id="donut-tipo-norma"
                title="Distribución por Tipo de Norma"
                slices=dashboard.tipo_donut
            />
            <HorizontalBars
                id="bar-top-etiquetas"
                title="Top 10 Etiquetas"
                bars=dashboard.top_etiquetas
            />
            <HorizontalBars
                id="bar-top-emisores"
                title="Top 15 Emisores"
                bars=dashboard.top_emisores
            />
            <Treemap
                id="treemap-categorias"
                title="Distribución por Categorías"
                tiles=dashboard.treemap
            />
            <WordCloud words=dashboard.word_cloud />
        </section>
    }
}

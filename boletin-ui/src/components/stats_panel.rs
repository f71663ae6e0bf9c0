//! Statistics Panel
//!
//! Total count and one proportional bar per norma type.

use boletin::stats::StatsPanel as Panel;
use leptos::*;

#[component]
pub fn StatsPanel(panel: Panel) -> impl IntoView {
    view! {
        <aside id="stats-panel" class="glass-card">
            <div class="stats-header">
                <span class="stats-total-label">"Total Normas"</span>
                <span class="stats-total-value">{panel.total_normas}</span>
            </div>
            <div class="stats-body">
                {panel
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="stat-row">
                                <div class="stat-row-label">
                                    {row.label} " " <span>"(" {row.count} ")"</span>
                                </div>
                                <div class="stat-row-value-bar">
                                    <div class="bar-container">
                                        <div
                                            class="bar"
                                            style=format!("width: {}%;", row.width_percent)
                                        ></div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}

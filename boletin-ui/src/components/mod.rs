//! UI Components
//!
//! Reusable Leptos components for the page.

pub mod charts;
pub mod filter_panel;
pub mod header;
pub mod loading;
pub mod norma_card;
pub mod scroll_top;
pub mod stats_panel;

pub use charts::{
    DonutChart, GaugeChart, HorizontalBars, KpiTile, Treemap, VerticalBars, WordCloud,
};
pub use filter_panel::FilterPanel;
pub use header::Header;
pub use loading::{LoadError, Loading};
pub use norma_card::NormaCard;
pub use scroll_top::ScrollTop;
pub use stats_panel::StatsPanel;

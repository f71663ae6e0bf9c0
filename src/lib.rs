//! # Boletín
//!
//! Daily digest of the Argentine *Boletín Oficial*: the producer's JSON feed
//! turned into a filterable page with a statistics dashboard.
//!
//! ## Modules
//!
//! - [`feed`]: Feed document model and load errors
//! - [`tags`]: Tag normalization into filter tokens
//! - [`taxonomy`]: Filter buttons grouped by category
//! - [`filter`]: Active-filter controller
//! - [`view`]: Main/dashboard view state machine
//! - [`stats`], [`dashboard`]: Statistics and chart view-models
//! - [`date`]: Header date display
//! - [`page`], [`render`]: Page view-model and static HTML renderer
//!
//! With the default `server` feature:
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`source`]: HTTP, file and in-memory feed sources
//! - [`api`]: Axum preview server
//!
//! ## Quick Start
//!
//! ```rust
//! use boletin::{render_page, Feed, PageModel};
//! use chrono::NaiveDate;
//!
//! let feed = Feed::from_json(r#"{ "normas": [ { "titulo": "Decreto 1/2025", "etiquetas": ["Salud"] } ] }"#)?;
//! let today = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
//! let page = PageModel::from_feed(&feed, "Boletín", today);
//!
//! let html = render_page(&page);
//! assert!(html.contains(r#"data-etiquetas="salud""#));
//! # Ok::<(), boletin::FeedError>(())
//! ```

pub mod dashboard;
pub mod date;
pub mod feed;
pub mod filter;
pub mod page;
pub mod render;
pub mod stats;
pub mod tags;
pub mod taxonomy;
pub mod view;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod source;

// Re-export top-level types for convenience
pub use feed::{Feed, FeedError, FeedResult, Norma, LOAD_ERROR_MESSAGE};

pub use tags::{normalize_tag, TagSet};

pub use taxonomy::{group_filters, FilterButton, FilterGroup};

pub use filter::{ActiveFilterIndicator, FilterState, FilterToken};

pub use view::{DashboardInit, ViewMode, ViewState};

pub use stats::StatsPanel;

pub use dashboard::Dashboard;

pub use page::{CardModel, HeaderModel, PageModel};

pub use render::{render_error_page, render_page};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError};

#[cfg(feature = "server")]
pub use source::{FeedSource, FileFeedSource, HttpFeedSource, StaticFeedSource};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError};

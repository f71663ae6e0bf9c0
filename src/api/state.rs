//! Application State
//!
//! Shared state accessible by all handlers. Everything is immutable; the
//! feed itself is fetched again on every request.

use chrono::{FixedOffset, NaiveDate, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, ServerConfig};
use crate::date::{offset_from_hours, today_at};
use crate::source::FeedSource;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Where the daily document is loaded from
    pub source: Arc<dyn FeedSource>,
    /// Page title
    pub title: Arc<str>,
    /// Offset used for "today" when the feed has no date
    pub utc_offset: FixedOffset,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn FeedSource>, config: &Config) -> Self {
        Self {
            source,
            title: Arc::from(config.site.title.as_str()),
            utc_offset: offset_from_hours(config.feed.utc_offset_hours),
            config: Arc::new(config.server.clone()),
            start_time: Instant::now(),
        }
    }

    /// Today's date in the configured offset
    pub fn today(&self) -> NaiveDate {
        today_at(Utc::now(), self.utc_offset)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

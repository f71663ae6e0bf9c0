//! Feed sources
//!
//! Where the daily document comes from: the remote JSON URL, a local file,
//! or an in-memory feed. [`load_page`] is the single place where a failed
//! load is logged and turned into the static error page.

mod file;
mod http;

pub use file::FileFeedSource;
pub use http::HttpFeedSource;

use async_trait::async_trait;
use chrono::{FixedOffset, NaiveDate, Utc};

use crate::date::today_at;
use crate::feed::{Feed, FeedError, FeedResult};
use crate::page::{HeaderModel, PageModel};
use crate::render::{render_error_page, render_page};

/// Anything that can produce the daily feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    /// Fetch and decode the feed
    async fn fetch(&self) -> FeedResult<Feed>;
}

/// Source returning a fixed, already decoded feed
#[derive(Debug, Clone, Default)]
pub struct StaticFeedSource {
    feed: Feed,
}

impl StaticFeedSource {
    pub fn new(feed: Feed) -> Self {
        Self { feed }
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn describe(&self) -> String {
        "static feed".to_string()
    }

    async fn fetch(&self) -> FeedResult<Feed> {
        Ok(self.feed.clone())
    }
}

/// A rendered document and whether it is the error page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub failed: bool,
}

/// Turn a load result into HTML. Failures are logged here and nowhere else.
pub fn render_result(result: FeedResult<Feed>, title: &str, today: NaiveDate) -> RenderedPage {
    match result {
        Ok(feed) => {
            let page = PageModel::from_feed(&feed, title, today);
            RenderedPage {
                html: render_page(&page),
                failed: false,
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "Error al cargar los datos");
            let header = HeaderModel::from_feed(&Feed::default(), title, today);
            RenderedPage {
                html: render_error_page(&header, err.user_message()),
                failed: true,
            }
        }
    }
}

/// Fetch from `source` once and render the page (or the error page)
pub async fn load_page(source: &dyn FeedSource, title: &str, offset: FixedOffset) -> RenderedPage {
    tracing::debug!(source = %source.describe(), "loading feed");
    let result = source.fetch().await;
    render_result(result, title, today_at(Utc::now(), offset))
}

/// Load the feed, logging a failure before handing it back
pub async fn load_feed(source: &dyn FeedSource) -> FeedResult<Feed> {
    source.fetch().await.map_err(|err: FeedError| {
        tracing::error!(source = %source.describe(), error = %err, "Error al cargar los datos");
        err
    })
}

//! Feed read from a local JSON file

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::FeedSource;
use crate::feed::{Feed, FeedResult};

#[derive(Debug, Clone)]
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> FeedResult<Feed> {
        let bytes = tokio::fs::read(&self.path).await?;
        Feed::from_slice(&bytes)
    }
}

//! Daily feed model
//!
//! Types mirroring the JSON document published by the feed producer, plus
//! the error type shared by every way of loading it.

pub mod error;
pub mod types;

pub use error::{FeedError, FeedResult, LOAD_ERROR_MESSAGE};
pub use types::{DatosInstitucionales, Desglose, Estadisticas, Feed, Norma};

/// Public location of the daily feed
pub const DEFAULT_FEED_URL: &str =
    "https://gist.githubusercontent.com/Aoneken/dec64d17e138aca63e0df545cd8a7d60/raw/bora_data.json";

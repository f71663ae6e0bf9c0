//! API Module
//!
//! HTTP access to the daily feed.

pub mod client;

pub use client::*;

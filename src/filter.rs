//! Filter controller
//!
//! Holds the active tag filter and decides which entry cards are visible.
//! Selecting a filter never mutates or re-fetches data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tags::{normalize_tag, TagSet};

/// Wire form of the "show everything" filter. Reserved: a tag that
/// normalizes to it never gets a button of its own.
pub const ALL_TOKEN: &str = "all";

/// Whether a normalized tag token can back its own filter
pub fn is_selectable(token: &str) -> bool {
    !token.is_empty() && token != ALL_TOKEN
}

/// The filter a reader can activate
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FilterToken {
    #[default]
    All,
    Tag(String),
}

impl FilterToken {
    /// Parse the value of a button's `data-filtro` attribute or a query
    /// parameter. Raw tags are normalized; `"all"` and blanks mean [`FilterToken::All`].
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_TOKEN {
            return FilterToken::All;
        }
        let token = normalize_tag(value);
        if !is_selectable(&token) {
            FilterToken::All
        } else {
            FilterToken::Tag(token)
        }
    }

    pub fn tag(token: impl Into<String>) -> Self {
        FilterToken::Tag(token.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterToken::All => ALL_TOKEN,
            FilterToken::Tag(token) => token,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterToken::All)
    }

    /// Whether a card with these tags passes the filter
    pub fn matches(&self, tags: &TagSet) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Tag(token) => tags.contains(token),
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FilterToken {
    fn from(value: String) -> Self {
        FilterToken::parse(&value)
    }
}

impl From<FilterToken> for String {
    fn from(token: FilterToken) -> Self {
        token.as_str().to_string()
    }
}

/// "Filtering by X" banner shown while a tag filter is active
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilterIndicator {
    pub token: String,
    pub label: String,
    /// Cards currently shown
    pub visible: usize,
    pub total: usize,
}

/// Active filter of the entry list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: FilterToken,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &FilterToken {
        &self.active
    }

    /// Activate a filter. Re-selecting the active tag keeps it active.
    pub fn select(&mut self, token: FilterToken) {
        tracing::debug!(filter = %token, "filter selected");
        self.active = token;
    }

    /// Return to showing every card
    pub fn clear(&mut self) {
        self.select(FilterToken::All);
    }

    /// Whether the button for `token` should be highlighted
    pub fn is_active(&self, token: &str) -> bool {
        match &self.active {
            FilterToken::All => false,
            FilterToken::Tag(active) => active == token,
        }
    }

    pub fn visible(&self, tags: &TagSet) -> bool {
        self.active.matches(tags)
    }

    /// Per-card visibility, in card order
    pub fn apply<'a, I>(&self, cards: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a TagSet>,
    {
        cards.into_iter().map(|tags| self.visible(tags)).collect()
    }

    /// Indicator for the active tag, `None` while showing everything.
    ///
    /// `label` resolves a token to its display label; the token itself is
    /// used when no label is known.
    pub fn indicator<'a, I, F>(&self, cards: I, label: F) -> Option<ActiveFilterIndicator>
    where
        I: IntoIterator<Item = &'a TagSet>,
        F: FnOnce(&str) -> Option<String>,
    {
        let token = match &self.active {
            FilterToken::All => return None,
            FilterToken::Tag(token) => token,
        };

        let visibility = self.apply(cards);
        Some(ActiveFilterIndicator {
            token: token.clone(),
            label: label(token).unwrap_or_else(|| token.clone()),
            visible: visibility.iter().filter(|v| **v).count(),
            total: visibility.len(),
        })
    }
}

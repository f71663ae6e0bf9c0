//! Page view-model
//!
//! Everything a renderer needs, computed once from the fetched feed.
//! Both the static HTML renderer and the WASM UI consume these types.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::date::{display_date, iso_date};
use crate::feed::{Feed, Norma};
use crate::filter::{ActiveFilterIndicator, FilterState};
use crate::stats::StatsPanel;
use crate::tags::TagSet;
use crate::taxonomy::{group_filters, label_for, FilterGroup};

/// Default page title
pub const DEFAULT_TITLE: &str = "Boletín Oficial · Síntesis diaria";

/// Shown instead of the list when the feed has no entries
pub const EMPTY_LIST_MESSAGE: &str = "No hay normas para mostrar.";

/// One entry card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardModel {
    pub titulo: String,
    pub emisor: String,
    pub descripcion: String,
    pub resumen: String,
    pub link: Option<String>,
    pub tags: TagSet,
}

impl CardModel {
    pub fn from_norma(norma: &Norma) -> Self {
        Self {
            titulo: norma.titulo.clone(),
            emisor: norma.emisor.clone(),
            descripcion: norma.descripcion.clone(),
            resumen: norma.resumen.clone(),
            link: norma.link().map(str::to_string),
            tags: TagSet::from_raw(&norma.etiquetas),
        }
    }
}

/// Header band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderModel {
    pub title: String,
    pub logo_url: Option<String>,
    /// `5 sept 2025`
    pub fecha: String,
    /// `2025-09-05`
    pub fecha_iso: String,
}

/// The whole page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    pub header: HeaderModel,
    pub sintesis: String,
    pub stats: StatsPanel,
    pub filters: Vec<FilterGroup>,
    pub cards: Vec<CardModel>,
    pub dashboard: Dashboard,
}

impl HeaderModel {
    pub fn from_feed(feed: &Feed, title: &str, today: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            logo_url: feed.logo_url().map(str::to_string),
            fecha: display_date(feed.fecha(), today),
            fecha_iso: iso_date(feed.fecha(), today),
        }
    }
}

impl PageModel {
    /// Build every section from the feed. `today` backs a missing `fecha`.
    pub fn from_feed(feed: &Feed, title: &str, today: NaiveDate) -> Self {
        let page = Self {
            header: HeaderModel::from_feed(feed, title, today),
            sintesis: feed.sintesis_del_dia.clone(),
            stats: StatsPanel::from_stats(&feed.estadisticas),
            filters: group_filters(&feed.estadisticas.desglose_etiquetas),
            cards: feed.normas.iter().map(CardModel::from_norma).collect(),
            dashboard: Dashboard::build(&feed.estadisticas),
        };

        tracing::debug!(
            cards = page.cards.len(),
            filter_groups = page.filters.len(),
            "page model built"
        );
        page
    }

    /// Per-card visibility under `filter`
    pub fn visibility(&self, filter: &FilterState) -> Vec<bool> {
        filter.apply(self.cards.iter().map(|c| &c.tags))
    }

    /// Indicator for the active filter, labelled from the filter buttons
    pub fn indicator(&self, filter: &FilterState) -> Option<ActiveFilterIndicator> {
        filter.indicator(self.cards.iter().map(|c| &c.tags), |token| {
            label_for(&self.filters, token).map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterToken;

    fn feed() -> Feed {
        Feed::from_json(
            r#"{
                "estadisticas": { "desgloseEtiquetas": { "Salud": 1, "Empleo": 1 } },
                "normas": [ { "etiquetas": ["Salud"] }, { "etiquetas": ["Empleo"] } ]
            }"#,
        )
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_salud_filter_shows_first_card_only() {
        let page = PageModel::from_feed(&feed(), DEFAULT_TITLE, today());
        let mut filter = FilterState::new();

        filter.select(FilterToken::parse("salud"));
        assert_eq!(page.visibility(&filter), vec![true, false]);

        let indicator = page.indicator(&filter).unwrap();
        assert_eq!(indicator.label, "Salud");
        assert_eq!((indicator.visible, indicator.total), (1, 2));

        filter.select(FilterToken::parse("all"));
        assert_eq!(page.visibility(&filter), vec![true, true]);
        assert!(page.indicator(&filter).is_none());
    }

    #[test]
    fn test_card_and_button_tokens_agree() {
        let page = PageModel::from_feed(&feed(), DEFAULT_TITLE, today());
        for group in &page.filters {
            for button in &group.buttons {
                assert!(page.cards.iter().any(|c| c.tags.contains(&button.token)));
            }
        }
    }

    #[test]
    fn test_missing_fecha_falls_back_to_today() {
        let page = PageModel::from_feed(&feed(), DEFAULT_TITLE, today());
        assert_eq!(page.header.fecha, "19 oct 2026");
        assert_eq!(page.header.fecha_iso, "2026-10-19");
    }
}

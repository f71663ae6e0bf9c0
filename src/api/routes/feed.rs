//! Feed Routes
//!
//! - GET /api/v1/feed - The raw feed document
//! - GET /api/v1/normas?etiqueta=<token> - Entries matching a filter
//! - GET /api/v1/filtros - Grouped filter buttons
//! - GET /api/v1/dashboard - Dashboard view-model

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{NormaDto, NormasQuery, NormasResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::Dashboard;
use crate::feed::Feed;
use crate::filter::{FilterState, FilterToken, ALL_TOKEN};
use crate::page::PageModel;
use crate::source::load_feed;
use crate::taxonomy::{group_filters, FilterGroup};

/// GET /api/v1/feed
///
/// Lets the browser UI use this server as its data URL.
pub async fn get_feed(State(state): State<Arc<AppState>>) -> ApiResult<Json<Feed>> {
    let feed = load_feed(state.source.as_ref()).await?;
    Ok(Json(feed))
}

/// GET /api/v1/normas
pub async fn list_normas(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NormasQuery>,
) -> ApiResult<Json<NormasResponse>> {
    let feed = load_feed(state.source.as_ref()).await?;
    let page = PageModel::from_feed(&feed, &state.title, state.today());

    let mut filter = FilterState::new();
    filter.select(FilterToken::parse(
        query.etiqueta.as_deref().unwrap_or(ALL_TOKEN),
    ));

    let normas: Vec<NormaDto> = page
        .cards
        .iter()
        .zip(page.visibility(&filter))
        .filter(|(_, visible)| *visible)
        .map(|(card, _)| NormaDto::from(card))
        .collect();

    Ok(Json(NormasResponse {
        filtro: filter.active().as_str().to_string(),
        total: page.cards.len(),
        visible: normas.len(),
        normas,
    }))
}

/// GET /api/v1/filtros
pub async fn list_filtros(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<FilterGroup>>> {
    let feed = load_feed(state.source.as_ref()).await?;
    Ok(Json(group_filters(&feed.estadisticas.desglose_etiquetas)))
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<Dashboard>> {
    let feed = load_feed(state.source.as_ref()).await?;
    Ok(Json(Dashboard::build(&feed.estadisticas)))
}

//! Page Route
//!
//! - GET / - The rendered page, or the error page with 502 when the feed
//!   cannot be loaded

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::source::render_result;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let result = state.source.fetch().await;
    let page = render_result(result, &state.title, state.today());

    if page.failed {
        (StatusCode::BAD_GATEWAY, Html(page.html)).into_response()
    } else {
        Html(page.html).into_response()
    }
}

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use hanzi_dict_backend::models::PageResult;
use hanzi_dict_backend::query::SearchKind;

use super::{error_response, ApiError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_type", rename = "type")]
    pub search_type: String,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_type() -> String { "zi".to_string() }
fn default_page() -> i64 { 1 }

/// GET /api/search - 搜索汉字
pub async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<PageResult>, ApiError> {
    // Malformed parameters (e.g. a non-numeric page) keep the JSON error shape
    let Query(params) = params
        .map_err(|rejection| (StatusCode::BAD_REQUEST, Json(json!({"error": rejection.body_text()}))))?;

    let query = params.q.trim();
    if query.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(json!({"error": "Query parameter required"}))));
    }

    let kind = SearchKind::from_token(&params.search_type);
    // Pages start at 1
    let page = params.page.max(1);

    let result = state
        .service
        .search(kind, query, page)
        .await
        .map_err(error_response)?;

    Ok(Json(result))
}

//! 数据统计

use axum::{extract::State, Json};
use std::sync::Arc;

use hanzi_dict_backend::models::Statistics;

use super::{error_response, ApiError};
use crate::state::AppState;

/// GET /api/stats - 字数、常见部首、笔画分布
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Statistics>, ApiError> {
    let stats = state.service.statistics().await.map_err(error_response)?;
    Ok(Json(stats))
}

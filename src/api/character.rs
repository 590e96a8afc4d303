use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use hanzi_dict_backend::DictError;

use hanzi_dict_backend::models::DecoratedRecord;

use super::{error_response, ApiError};
use crate::state::AppState;

/// GET /api/character/:id - 汉字详情
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DecoratedRecord>, ApiError> {
    // A non-integer id matches no character
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!("Rejected character id: {}", rejection.body_text());
        error_response(DictError::NotFound(0))
    })?;

    let character = state.service.character(id).await.map_err(error_response)?;
    Ok(Json(character))
}

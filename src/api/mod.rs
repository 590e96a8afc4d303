pub mod character;
pub mod search;
pub mod server;
pub mod stats;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use hanzi_dict_backend::DictError;

use crate::state::AppState;

pub type ApiError = (StatusCode, Json<Value>);

/// Map a service error to a JSON error response / 错误转换为响应
pub fn error_response(err: DictError) -> ApiError {
    match err {
        DictError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, Json(json!({"error": msg}))),
        DictError::NotFound(_) => (StatusCode::NOT_FOUND, Json(json!({"error": "Character not found"}))),
        DictError::Database(e) => {
            tracing::error!("Database error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "服务器错误"})))
        }
    }
}

/// Build the HTTP router / 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    let upload_dir = state.config.get_upload_dir();

    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/version", get(server::get_version_info))
        .route("/api/search", get(search::search))
        .route("/api/character/:id", get(character::get_character))
        .route("/api/stats", get(stats::get_stats))
        .nest_service("/Upload", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

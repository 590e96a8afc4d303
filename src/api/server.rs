use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::state::AppState;

/// GET /api/health - 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "汉语字典服务运行正常"
    }))
}

/// GET /api/version - 获取版本信息
pub async fn get_version_info(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "backend_version": env!("CARGO_PKG_VERSION"),
        "build_time": env!("BUILD_TIME"),
        "items_per_page": state.service.page_size(),
    }))
}

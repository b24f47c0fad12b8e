use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::CacheStatus;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /api/status
///
/// Состояние кеша без побочных эффектов: не триггерит пересчет.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<CacheStatus> {
    Json(state.cache.status().await)
}

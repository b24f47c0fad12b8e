use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/seats", get(get_seats))
}

/// GET /api/seats
///
/// Отдает последний отчет о местах. Протухший кеш пересчитывается прямо
/// в этом запросе; 500 возвращаем только когда пересчет провалился
/// целиком (ни одна страница не была скачана).
pub async fn get_seats(State(state): State<Arc<AppState>>) -> Response {
    match state.cache.get_or_refresh(&state.scraper).await {
        Ok(entry) => Json(json!({
            "data": entry.report,
            "cached_at": entry.computed_at,
            "cache_expires_at": entry.computed_at + state.cache.ttl(),
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("get_seats: recompute failed: {}", e);
            // Метка времени остается от прошлого успешного пересчета
            let cached_at = state.cache.computed_at().await;
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch seat data",
                    "cached_at": cached_at,
                })),
            )
                .into_response()
        }
    }
}

pub mod seats;
pub mod status;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(status::routes())
}

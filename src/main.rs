use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_monitor::{config::Config, controllers, AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Seat Monitor API");
    info!("Tracking {} event pages", config.events.len());

    let addr = format!("{}:{}", config.app.host, config.app.port);

    // Create the shared application state
    let app_state = AppState::new(config).expect("Failed to build HTTP client");

    // Create the main router
    let app = Router::new()
        .route("/", get(|| async { "Seat Monitor API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        // Mount the routes from the controllers module
        .nest("/api", controllers::routes())
        // Pass the application state to the router
        .with_state(app_state.clone())
        // Браузерный фронтенд ходит с другого origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

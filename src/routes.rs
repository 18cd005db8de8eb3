use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::CorsConfig;
use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        // Health check
        .route("/", get(handlers::read_root))
        .route("/process_audio", post(handlers::process_audio))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allow-listed origins only. Credentials are allowed, so methods and
/// headers are mirrored from the request instead of using a wildcard.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .permitted_origins()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

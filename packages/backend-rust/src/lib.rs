pub mod config;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::DatabaseProxy;
use crate::state::AppState;

/// Opens the practice store and assembles the HTTP application. A store that
/// fails to open leaves the routes answering 503 instead of aborting start-up.
pub async fn create_app(config: &Config) -> axum::Router {
    let db_proxy = match DatabaseProxy::connect(config.database.clone()).await {
        Ok(proxy) => Some(Arc::new(proxy)),
        Err(err) => {
            tracing::warn!(error = %err, "practice store not initialized");
            None
        }
    };

    if config.seed_words {
        if let Some(proxy) = db_proxy.as_deref() {
            if let Err(err) = seed::seed_words(proxy).await {
                tracing::warn!(error = %err, "word seeding failed");
            }
        }
    }

    let state = AppState::new(db_proxy, config.practice_zone);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(error = %err, origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

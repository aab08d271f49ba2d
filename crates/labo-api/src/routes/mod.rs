//! HTTP routes.
//!
//! One module per entity family, merged into a single router. Handlers are
//! thin: validate parameters, call one repository method, wrap the result
//! in `Json`.

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use labo_db::LaboDb;
use serde::Serialize;
use tower_http::trace::TraceLayer;

mod chercheurs;
mod equipes;
mod params;
mod projets;

/// Shared handler state: the process-wide store handle.
pub(crate) type AppState = Arc<LaboDb>;

/// Build the full application router.
#[must_use]
pub fn router(db: Arc<LaboDb>) -> Router {
    Router::new()
        .route("/", get(racine))
        .route("/health", get(health))
        .merge(projets::routes())
        .merge(chercheurs::routes())
        .merge(equipes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

async fn racine() -> &'static str {
    "Hello World!"
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Liveness probe; never touches the store.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

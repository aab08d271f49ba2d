//! Team routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use labo_core::projections::EquipeAvecCompte;

use super::AppState;
use crate::error::ApiError;

pub(crate) fn routes() -> Router<AppState> {
    Router::new().route("/equipes", get(liste))
}

/// All teams with the number of projects each owns.
async fn liste(State(db): State<AppState>) -> Result<Json<Vec<EquipeAvecCompte>>, ApiError> {
    Ok(Json(db.equipes_avec_nombre_projets().await?))
}

//! Researcher routes.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use labo_core::projections::{ChercheurAvecEquipe, ChercheurQualifie, Collegue};

use super::AppState;
use super::params::{parse_f64, parse_i64, require};
use crate::error::ApiError;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/chercheurs", get(liste))
        .route("/chercheurs-projets-actifs", get(projets_actifs))
        .route("/chercheurs-collegues", get(collegues))
}

/// All researchers with their team name.
async fn liste(State(db): State<AppState>) -> Result<Json<Vec<ChercheurAvecEquipe>>, ApiError> {
    Ok(Json(db.chercheurs_avec_equipe().await?))
}

#[derive(Debug, Deserialize)]
struct ProjetsActifsParams {
    #[serde(rename = "valeurX")]
    valeur_x: Option<String>,
    annee: Option<String>,
}

/// `GET /chercheurs-projets-actifs?valeurX=100000&annee=2018`
async fn projets_actifs(
    State(db): State<AppState>,
    Query(params): Query<ProjetsActifsParams>,
) -> Result<Json<Vec<ChercheurQualifie>>, ApiError> {
    let valeur_x = parse_f64(&require(params.valeur_x, "valeurX")?, "valeurX")?;
    let annee = parse_i64(&require(params.annee, "annee")?, "annee")?;
    Ok(Json(db.chercheurs_qualifies(valeur_x, annee).await?))
}

#[derive(Debug, Deserialize)]
struct ColleguesParams {
    nom: Option<String>,
    annee: Option<String>,
}

/// `GET /chercheurs-collegues?nom=BOUGUEROUA&annee=2018`
async fn collegues(
    State(db): State<AppState>,
    Query(params): Query<ColleguesParams>,
) -> Result<Json<Vec<Collegue>>, ApiError> {
    let nom = require(params.nom, "nom")?;
    let annee = parse_i64(&require(params.annee, "annee")?, "annee")?;
    Ok(Json(db.collegues(&nom, annee).await?))
}

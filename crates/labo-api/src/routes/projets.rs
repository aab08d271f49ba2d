//! Project routes: budget views and project-centric analytics.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use labo_core::entities::Projet;
use labo_core::projections::{BudgetRow, ProjetResume};

use super::AppState;
use super::params::{non_vide, parse_f64, parse_i64, require};
use crate::error::ApiError;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/projets/budgets", get(budgets))
        .route("/projets/budgets-interval", get(budgets_interval))
        .route("/projets-budget-sup", get(budget_sup))
        .route("/projets-communs", get(communs))
}

/// Distinct non-null budgets, descending.
async fn budgets(State(db): State<AppState>) -> Result<Json<Vec<BudgetRow>>, ApiError> {
    Ok(Json(db.budgets_distincts().await?))
}

#[derive(Debug, Deserialize)]
struct IntervalParams {
    min: Option<String>,
    max: Option<String>,
}

/// `GET /projets/budgets-interval?min=5000&max=100000`
async fn budgets_interval(
    State(db): State<AppState>,
    Query(params): Query<IntervalParams>,
) -> Result<Json<Vec<Projet>>, ApiError> {
    let (Some(min), Some(max)) = (non_vide(params.min), non_vide(params.max)) else {
        return Err(ApiError::Validation(
            "Vous devez spécifier les paramètres 'min' et 'max'.".to_string(),
        ));
    };
    let min = parse_f64(&min, "min")?;
    let max = parse_f64(&max, "max")?;
    Ok(Json(db.projets_par_budget(min, max).await?))
}

#[derive(Debug, Deserialize)]
struct AnneeParams {
    annee: Option<String>,
}

/// `GET /projets-budget-sup?annee=2018`
async fn budget_sup(
    State(db): State<AppState>,
    Query(params): Query<AnneeParams>,
) -> Result<Json<Vec<ProjetResume>>, ApiError> {
    let annee = parse_i64(&require(params.annee, "annee")?, "annee")?;
    Ok(Json(db.projets_budget_sup(annee).await?))
}

#[derive(Debug, Deserialize)]
struct CommunsParams {
    #[serde(rename = "nomA")]
    nom_a: Option<String>,
    #[serde(rename = "nomB")]
    nom_b: Option<String>,
}

/// `GET /projets-communs?nomA=BOUGUEROUA&nomB=ZAIDI`
async fn communs(
    State(db): State<AppState>,
    Query(params): Query<CommunsParams>,
) -> Result<Json<Vec<ProjetResume>>, ApiError> {
    let nom_a = require(params.nom_a, "nomA")?;
    let nom_b = require(params.nom_b, "nomB")?;
    Ok(Json(db.projets_communs(&nom_a, &nom_b).await?))
}

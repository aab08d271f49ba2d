//! JSON projections returned by the HTTP endpoints.
//!
//! Key names are part of the public API contract and are kept verbatim
//! (`Nom`, `Prenom`, `Equipe`, ...), including the uppercase `BUDGET` of the
//! distinct-budgets view which exposes the raw column name.

use serde::{Deserialize, Serialize};

/// Shown in place of a missing first name.
pub const PRENOM_PAR_DEFAUT: &str = "Non spécifié";

/// One distinct budget value (`/projets/budgets`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetRow {
    #[serde(rename = "BUDGET")]
    pub budget: f64,
}

/// A researcher with their team name (`/chercheurs`).
///
/// `equipe` is omitted from the JSON object entirely when the researcher
/// has no team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChercheurAvecEquipe {
    #[serde(rename = "Nom")]
    pub nom: String,
    #[serde(rename = "Prenom")]
    pub prenom: String,
    #[serde(rename = "Equipe", skip_serializing_if = "Option::is_none")]
    pub equipe: Option<String>,
}

/// A team with the number of projects it owns (`/equipes`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquipeAvecCompte {
    #[serde(rename = "Nom")]
    pub nom: String,
    #[serde(rename = "NombreDeProjets")]
    pub nombre_de_projets: i64,
}

/// A researcher with more than two qualifying affiliations
/// (`/chercheurs-projets-actifs`).
///
/// Each entry of `projets` is rendered as `"Name (budget€)"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChercheurQualifie {
    #[serde(rename = "Nom")]
    pub nom: String,
    #[serde(rename = "Prenom")]
    pub prenom: String,
    #[serde(rename = "Projets")]
    pub projets: Vec<String>,
}

/// A colleague sharing at least one project in the requested year
/// (`/chercheurs-collegues`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collegue {
    #[serde(rename = "Nom")]
    pub nom: String,
    #[serde(rename = "Prenom")]
    pub prenom: String,
}

/// A project reduced to name and budget
/// (`/projets-budget-sup`, `/projets-communs`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjetResume {
    #[serde(rename = "Nom")]
    pub nom: String,
    #[serde(rename = "Budget")]
    pub budget: Option<f64>,
}

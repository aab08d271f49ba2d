use serde::{Deserialize, Serialize};

/// A funded project, owned by a team.
///
/// `budget` is nullable in the store; when present it is non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Projet {
    pub np: i64,
    pub nom: String,
    pub budget: Option<f64>,
    pub ne: i64,
}

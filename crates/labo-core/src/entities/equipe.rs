use serde::{Deserialize, Serialize};

/// A team. Owns zero or more projects and has zero or more members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Equipe {
    pub ne: i64,
    pub nom: String,
}

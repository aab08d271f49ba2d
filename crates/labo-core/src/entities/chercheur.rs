use serde::{Deserialize, Serialize};

/// A researcher. Belongs to at most one team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Chercheur {
    pub nc: i64,
    pub nom: String,
    pub prenom: Option<String>,
    /// Key of the team this researcher belongs to, if any.
    pub ne: Option<i64>,
}

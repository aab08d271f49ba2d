use serde::{Deserialize, Serialize};

/// Yearly affiliation linking a researcher to a project.
///
/// Several rows may exist for the same (researcher, project) pair across
/// different years.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub struct Aff {
    pub nc: i64,
    pub np: i64,
    pub annee: i64,
}

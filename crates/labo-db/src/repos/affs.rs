//! Affiliation repository.

use labo_core::entities::Aff;

use crate::LaboDb;
use crate::error::DatabaseError;

impl LaboDb {
    /// Affiliation rows of the researcher with last name `nom`, optionally
    /// restricted to one year.
    ///
    /// Feeds the two-step queries: callers take the project ids from the
    /// returned rows and fetch the dependents in a second query.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn affs_du_chercheur(
        &self,
        nom: &str,
        annee: Option<i64>,
    ) -> Result<Vec<Aff>, DatabaseError> {
        let mut params: Vec<libsql::Value> = vec![libsql::Value::Text(nom.to_string())];
        let mut sql = String::from(
            "SELECT a.NC, a.NP, a.ANNEE FROM AFF a
             JOIN CHERCHEUR c ON c.NC = a.NC
             WHERE c.NOM = ?1",
        );
        if let Some(annee) = annee {
            params.push(libsql::Value::Integer(annee));
            sql.push_str(&format!(" AND a.ANNEE = ?{}", params.len()));
        }

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut affs = Vec::new();
        while let Some(row) = rows.next().await? {
            affs.push(Aff {
                nc: row.get::<i64>(0)?,
                np: row.get::<i64>(1)?,
                annee: row.get::<i64>(2)?,
            });
        }
        Ok(affs)
    }
}

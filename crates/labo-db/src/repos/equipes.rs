//! Team repository.

use std::collections::HashMap;

use labo_core::entities::Equipe;
use labo_core::projections::EquipeAvecCompte;

use crate::LaboDb;
use crate::error::DatabaseError;

impl LaboDb {
    /// All teams, raw rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn equipes(&self) -> Result<Vec<Equipe>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT NE, NOM FROM EQUIPE ORDER BY NE", ())
            .await?;
        let mut equipes = Vec::new();
        while let Some(row) = rows.next().await? {
            equipes.push(Equipe {
                ne: row.get::<i64>(0)?,
                nom: row.get::<String>(1)?,
            });
        }
        Ok(equipes)
    }

    /// All teams with the number of projects each owns.
    ///
    /// Teams owning no project are kept with a count of 0.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either query fails.
    pub async fn equipes_avec_nombre_projets(
        &self,
    ) -> Result<Vec<EquipeAvecCompte>, DatabaseError> {
        let equipes = self.equipes().await?;

        let mut rows = self
            .conn()
            .query("SELECT NE, COUNT(*) FROM PROJET GROUP BY NE", ())
            .await?;
        let mut comptes: HashMap<i64, i64> = HashMap::new();
        while let Some(row) = rows.next().await? {
            comptes.insert(row.get::<i64>(0)?, row.get::<i64>(1)?);
        }

        Ok(equipes
            .into_iter()
            .map(|equipe| EquipeAvecCompte {
                nombre_de_projets: comptes.get(&equipe.ne).copied().unwrap_or(0),
                nom: equipe.nom,
            })
            .collect())
    }
}

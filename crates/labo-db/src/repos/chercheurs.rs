//! Researcher repository.
//!
//! Covers the plain researcher listing plus the two researcher-centric
//! analytical views (qualified researchers, colleagues on shared projects).

use std::collections::HashMap;

use labo_core::entities::Chercheur;
use labo_core::projections::{
    ChercheurAvecEquipe, ChercheurQualifie, Collegue, PRENOM_PAR_DEFAUT,
};

use crate::LaboDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, in_placeholders};

fn prenom_ou_defaut(prenom: Option<String>) -> String {
    prenom.unwrap_or_else(|| PRENOM_PAR_DEFAUT.to_string())
}

impl LaboDb {
    /// All researchers, raw rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn chercheurs(&self) -> Result<Vec<Chercheur>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT NC, NOM, PRENOM, NE FROM CHERCHEUR ORDER BY NC", ())
            .await?;
        let mut chercheurs = Vec::new();
        while let Some(row) = rows.next().await? {
            chercheurs.push(Chercheur {
                nc: row.get::<i64>(0)?,
                nom: row.get::<String>(1)?,
                prenom: get_opt_string(&row, 2)?,
                ne: row.get::<Option<i64>>(3)?,
            });
        }
        Ok(chercheurs)
    }

    /// All researchers joined to their team name.
    ///
    /// Researchers without a team are kept; their `equipe` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn chercheurs_avec_equipe(
        &self,
    ) -> Result<Vec<ChercheurAvecEquipe>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT c.NOM, c.PRENOM, e.NOM FROM CHERCHEUR c
                 LEFT JOIN EQUIPE e ON e.NE = c.NE
                 ORDER BY c.NC",
                (),
            )
            .await?;
        let mut result = Vec::new();
        while let Some(row) = rows.next().await? {
            result.push(ChercheurAvecEquipe {
                nom: row.get::<String>(0)?,
                prenom: prenom_ou_defaut(get_opt_string(&row, 1)?),
                equipe: get_opt_string(&row, 2)?,
            });
        }
        Ok(result)
    }

    /// Researchers holding strictly more than two affiliations in `annee`
    /// to projects with a budget strictly greater than `valeur_x`.
    ///
    /// Two steps: fetch the qualifying affiliations grouped per researcher,
    /// then the researchers themselves. Each project entry is rendered as
    /// `"Name (budget€)"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either query fails.
    pub async fn chercheurs_qualifies(
        &self,
        valeur_x: f64,
        annee: i64,
    ) -> Result<Vec<ChercheurQualifie>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT a.NC, p.NOM, p.BUDGET FROM AFF a
                 JOIN PROJET p ON p.NP = a.NP
                 WHERE a.ANNEE = ?1 AND p.BUDGET > ?2
                 ORDER BY a.NC, a.NP",
                libsql::params![annee, valeur_x],
            )
            .await?;

        let mut projets_par_chercheur: HashMap<i64, Vec<String>> = HashMap::new();
        while let Some(row) = rows.next().await? {
            let nc = row.get::<i64>(0)?;
            let nom = row.get::<String>(1)?;
            let budget = row.get::<f64>(2)?;
            projets_par_chercheur
                .entry(nc)
                .or_default()
                .push(format!("{nom} ({budget}€)"));
        }

        let mut qualifies = Vec::new();
        for chercheur in self.chercheurs().await? {
            let Some(projets) = projets_par_chercheur.remove(&chercheur.nc) else {
                continue;
            };
            if projets.len() > 2 {
                qualifies.push(ChercheurQualifie {
                    nom: chercheur.nom,
                    prenom: prenom_ou_defaut(chercheur.prenom),
                    projets,
                });
            }
        }
        Ok(qualifies)
    }

    /// Every *other* researcher affiliated in `annee` with any project the
    /// researcher `nom` was affiliated with that year.
    ///
    /// One row per matching affiliation: a colleague sharing several
    /// projects appears several times. The named researcher never appears
    /// in their own list.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either query fails.
    pub async fn collegues(&self, nom: &str, annee: i64) -> Result<Vec<Collegue>, DatabaseError> {
        let ids: Vec<i64> = self
            .affs_du_chercheur(nom, Some(annee))
            .await?
            .into_iter()
            .map(|aff| aff.np)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut params: Vec<libsql::Value> = vec![
            libsql::Value::Integer(annee),
            libsql::Value::Text(nom.to_string()),
        ];
        params.extend(ids.iter().map(|np| libsql::Value::Integer(*np)));
        let sql = format!(
            "SELECT c.NOM, c.PRENOM FROM AFF a
             JOIN CHERCHEUR c ON c.NC = a.NC
             WHERE a.ANNEE = ?1 AND c.NOM <> ?2 AND a.NP IN ({})
             ORDER BY a.NP, c.NC",
            in_placeholders(3, ids.len())
        );

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut collegues = Vec::new();
        while let Some(row) = rows.next().await? {
            collegues.push(Collegue {
                nom: row.get::<String>(0)?,
                prenom: prenom_ou_defaut(get_opt_string(&row, 1)?),
            });
        }
        Ok(collegues)
    }
}

//! Project repository.
//!
//! Budget views plus the two project-centric analytical views
//! (projects above the year's affiliated maximum, projects common to two
//! researchers).

use labo_core::entities::Projet;
use labo_core::projections::{BudgetRow, ProjetResume};

use crate::LaboDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_f64, in_placeholders};

impl LaboDb {
    /// Distinct non-null budgets, one row per value, descending.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn budgets_distincts(&self) -> Result<Vec<BudgetRow>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT DISTINCT BUDGET FROM PROJET
                 WHERE BUDGET IS NOT NULL
                 ORDER BY BUDGET DESC",
                (),
            )
            .await?;
        let mut budgets = Vec::new();
        while let Some(row) = rows.next().await? {
            budgets.push(BudgetRow {
                budget: row.get::<f64>(0)?,
            });
        }
        Ok(budgets)
    }

    /// Projects with a budget in `[min, max]`, ascending by budget.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn projets_par_budget(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<Projet>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT NP, NOM, BUDGET, NE FROM PROJET
                 WHERE BUDGET >= ?1 AND BUDGET <= ?2
                 ORDER BY BUDGET ASC",
                libsql::params![min, max],
            )
            .await?;
        let mut projets = Vec::new();
        while let Some(row) = rows.next().await? {
            projets.push(Projet {
                np: row.get::<i64>(0)?,
                nom: row.get::<String>(1)?,
                budget: get_opt_f64(&row, 2)?,
                ne: row.get::<i64>(3)?,
            });
        }
        Ok(projets)
    }

    /// Projects whose budget strictly exceeds the maximum budget among
    /// projects affiliated-to in `annee`.
    ///
    /// Two steps: collect the budgets of that year's affiliated projects
    /// (maximum 0 when there are none), then fetch every project above it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either query fails.
    pub async fn projets_budget_sup(&self, annee: i64) -> Result<Vec<ProjetResume>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT p.BUDGET FROM AFF a
                 JOIN PROJET p ON p.NP = a.NP
                 WHERE a.ANNEE = ?1",
                [annee],
            )
            .await?;
        // Budgets are non-negative, so folding from 0 also covers the
        // no-affiliation case.
        let mut budget_max = 0.0_f64;
        while let Some(row) = rows.next().await? {
            if let Some(budget) = get_opt_f64(&row, 0)? {
                budget_max = budget_max.max(budget);
            }
        }

        let mut rows = self
            .conn()
            .query(
                "SELECT NOM, BUDGET FROM PROJET WHERE BUDGET > ?1 ORDER BY NP",
                libsql::params![budget_max],
            )
            .await?;
        let mut projets = Vec::new();
        while let Some(row) = rows.next().await? {
            projets.push(ProjetResume {
                nom: row.get::<String>(0)?,
                budget: get_opt_f64(&row, 1)?,
            });
        }
        Ok(projets)
    }

    /// Projects affiliated with `nom_a` (any year) that `nom_b` is also
    /// affiliated with.
    ///
    /// One row per matching affiliation record of `nom_b`: a project shared
    /// across several of `nom_b`'s years appears once per year.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if either query fails.
    pub async fn projets_communs(
        &self,
        nom_a: &str,
        nom_b: &str,
    ) -> Result<Vec<ProjetResume>, DatabaseError> {
        let ids: Vec<i64> = self
            .affs_du_chercheur(nom_a, None)
            .await?
            .into_iter()
            .map(|aff| aff.np)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut params: Vec<libsql::Value> = vec![libsql::Value::Text(nom_b.to_string())];
        params.extend(ids.iter().map(|np| libsql::Value::Integer(*np)));
        let sql = format!(
            "SELECT p.NOM, p.BUDGET FROM AFF a
             JOIN CHERCHEUR c ON c.NC = a.NC
             JOIN PROJET p ON p.NP = a.NP
             WHERE c.NOM = ?1 AND a.NP IN ({})
             ORDER BY a.NP, a.ANNEE",
            in_placeholders(2, ids.len())
        );

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut projets = Vec::new();
        while let Some(row) = rows.next().await? {
            projets.push(ProjetResume {
                nom: row.get::<String>(0)?,
                budget: get_opt_f64(&row, 1)?,
            });
        }
        Ok(projets)
    }
}

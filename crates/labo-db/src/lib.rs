//! # labo-db
//!
//! libSQL data access for the laboratory directory service.
//!
//! Strictly a read path: every repository method issues `SELECT`s and maps
//! rows into `labo-core` types. Schema and writes are owned by the external
//! store's own tooling.
//!
//! Uses the `libsql` crate (C `SQLite` fork) — works against a local
//! database file as well as a remote libSQL/Turso instance.

pub mod error;
pub mod helpers;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

/// Process-wide database handle, shared read-only across all requests.
///
/// Wraps a libSQL database and one connection. All repository methods live
/// in `repos/` as `impl LaboDb` blocks.
pub struct LaboDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LaboDb {
    /// Open a local database file (or `":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Ok(Self { db, conn })
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    ///
    /// Repository methods use this internally; tests use it to install
    /// their schema and seed rows.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

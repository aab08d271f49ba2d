//! # labo-api
//!
//! HTTP query service exposing read-only analytical views over the
//! laboratory directory store (researchers, teams, projects, yearly
//! affiliations).
//!
//! Every route is a direct request → query → reshape → response cycle with
//! no cross-request state: handlers share one process-wide [`labo_db::LaboDb`]
//! handle and delegate all data access to its repositories.

pub mod error;
pub mod routes;

pub use routes::router;

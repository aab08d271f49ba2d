//! # labo-core
//!
//! Shared types for the laboratory directory query service.
//!
//! This crate provides the foundational types used across the workspace:
//! - Entity structs mirroring the four tables of the external store
//!   (chercheurs, equipes, projets, affiliations)
//! - Projection structs defining the JSON shape of each HTTP endpoint

pub mod entities;
pub mod projections;

//! Entity structs mirroring the external store's tables.
//!
//! Field names follow Rust conventions; serde renames restore the store's
//! uppercase column names so a serialized entity matches the raw row shape.

mod aff;
mod chercheur;
mod equipe;
mod projet;

pub use aff::Aff;
pub use chercheur::Chercheur;
pub use equipe::Equipe;
pub use projet::Projet;

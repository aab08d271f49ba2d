//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use labo_db::error::DatabaseError;
use thiserror::Error;

/// Generic body returned for any store failure. The underlying error is
/// logged server-side and never sent to the client.
pub const ERREUR_RECUPERATION: &str = "Erreur lors de la récupération des données";

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed query parameter.
    #[error("{0}")]
    Validation(String),

    /// Any failure from the data-access layer.
    #[error(transparent)]
    Store(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Store(error) => {
                tracing::error!(%error, "store query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERREUR_RECUPERATION.to_string(),
                )
                    .into_response()
            }
        }
    }
}

//! Query-string parameter validation.
//!
//! Missing and malformed values are rejected with a 400 instead of being
//! coerced into a never-matching numeric filter.

use crate::error::ApiError;

/// Treat an absent or empty parameter as missing.
pub(crate) fn non_vide(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Require a parameter to be present and non-empty.
pub(crate) fn require(value: Option<String>, nom: &str) -> Result<String, ApiError> {
    non_vide(value).ok_or_else(|| {
        ApiError::Validation(format!("Vous devez spécifier le paramètre '{nom}'."))
    })
}

/// Parse a float parameter (budgets, thresholds).
pub(crate) fn parse_f64(value: &str, nom: &str) -> Result<f64, ApiError> {
    value.parse().map_err(|_| {
        ApiError::Validation(format!("Le paramètre '{nom}' doit être un nombre."))
    })
}

/// Parse an integer parameter (years).
pub(crate) fn parse_i64(value: &str, nom: &str) -> Result<i64, ApiError> {
    value.parse().map_err(|_| {
        ApiError::Validation(format!("Le paramètre '{nom}' doit être un entier."))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_as_missing() {
        assert_eq!(non_vide(Some(String::new())), None);
        assert!(require(Some(String::new()), "annee").is_err());
        assert!(require(None, "annee").is_err());
        assert_eq!(require(Some("2018".into()), "annee").unwrap(), "2018");
    }

    #[test]
    fn numeric_parsing_rejects_garbage() {
        assert_eq!(parse_f64("100000", "valeurX").unwrap(), 100000.0);
        assert_eq!(parse_f64("1500.5", "valeurX").unwrap(), 1500.5);
        assert!(parse_f64("abc", "valeurX").is_err());

        assert_eq!(parse_i64("2018", "annee").unwrap(), 2018);
        assert!(parse_i64("2018.5", "annee").is_err());
        assert!(parse_i64("abc", "annee").is_err());
    }

    #[test]
    fn error_message_names_the_parameter() {
        let err = require(None, "annee").unwrap_err();
        assert!(err.to_string().contains("'annee'"));
    }
}

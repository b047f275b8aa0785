//! Form definitions backing the HTML routes.
//!
//! Forms deserialize straight from request bodies, carry their `validator`
//! annotations, and convert into domain payloads via `TryFrom`, so routes
//! and services never touch raw field strings.

use chrono::{NaiveDate, NaiveTime};
use phonenumber::Mode;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

pub mod courses;
pub mod parents;
pub mod rooms;
pub mod students;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid phone number")]
    InvalidPhoneNumber,

    #[error("invalid date, expected YYYY-MM-DD")]
    InvalidDate,

    #[error("invalid time, expected HH:MM")]
    InvalidTime,

    #[error("end time must be after start time")]
    EmptyTimeSpan,

    #[error("could not read upload: {0}")]
    Upload(String),

    #[error("CSV row {0}: {1}")]
    Csv(usize, String),
}

/// Deserializes an optional text field, trimming it and turning empty
/// submissions into `None`.
pub(crate) fn de_opt_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Normalizes a phone number to E.164 format. Empty input is `None`.
pub(crate) fn normalize_phone(value: Option<&str>) -> Result<Option<String>, FormError> {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let parsed = phonenumber::parse(None, raw).map_err(|_| FormError::InvalidPhoneNumber)?;
    Ok(Some(parsed.format().mode(Mode::E164).to_string()))
}

/// Strips any markup from free-form text. Empty results are `None`.
pub(crate) fn sanitize_notes(value: Option<&str>) -> Option<String> {
    value
        .map(|s| ammonia::clean(s.trim()))
        .filter(|s| !s.is_empty())
}

pub(crate) fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, FormError> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| FormError::InvalidDate))
        .transpose()
}

pub(crate) fn parse_time(value: &str) -> Result<NaiveTime, FormError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| FormError::InvalidTime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_phone_produces_e164() {
        let normalized = normalize_phone(Some("+1 555 123 4567")).unwrap();
        assert_eq!(normalized.as_deref(), Some("+15551234567"));
    }

    #[test]
    fn normalize_phone_rejects_garbage() {
        assert!(normalize_phone(Some("not a phone")).is_err());
    }

    #[test]
    fn normalize_phone_passes_empty_through() {
        assert_eq!(normalize_phone(None).unwrap(), None);
        assert_eq!(normalize_phone(Some("  ")).unwrap(), None);
    }

    #[test]
    fn sanitize_notes_strips_markup() {
        let cleaned = sanitize_notes(Some("<script>alert(1)</script>needs glasses"));
        assert_eq!(cleaned.as_deref(), Some("needs glasses"));
    }

    #[test]
    fn parse_time_accepts_hh_mm() {
        assert!(parse_time("09:30").is_ok());
        assert!(parse_time("9:3x").is_err());
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::listing::SortKey;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrolled_on: Option<NaiveDate>,
    /// Free-form staff notes, sanitized HTML.
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrolled_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub is_active: bool,
}

impl NewStudent {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<String>,
        enrolled_on: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            enrolled_on,
            notes: notes
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            is_active: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrolled_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub is_active: bool,
}

impl UpdateStudent {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<String>,
        enrolled_on: Option<NaiveDate>,
        notes: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            enrolled_on,
            notes: notes
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            is_active,
        }
    }
}

/// Columns the student roster can be sorted by. `Name` orders by last
/// name, then first name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentSortField {
    Name,
    Email,
    EnrolledOn,
}

impl SortKey for StudentSortField {
    const ALL: &'static [Self] = &[
        StudentSortField::Name,
        StudentSortField::Email,
        StudentSortField::EnrolledOn,
    ];

    fn key(self) -> &'static str {
        match self {
            StudentSortField::Name => "name",
            StudentSortField::Email => "email",
            StudentSortField::EnrolledOn => "enrolled_on",
        }
    }
}

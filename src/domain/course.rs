use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listing::SortKey;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    /// Short course code, unique per school (e.g. `MATH-101`).
    pub code: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub is_active: bool,
}

impl NewCourse {
    #[must_use]
    pub fn new(
        name: String,
        code: String,
        description: Option<String>,
        department: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            code: code.trim().to_uppercase(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            department: department
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            is_active: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCourse {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub is_active: bool,
}

impl UpdateCourse {
    #[must_use]
    pub fn new(
        name: String,
        code: String,
        description: Option<String>,
        department: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            code: code.trim().to_uppercase(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            department: department
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseSortField {
    Name,
    Code,
    CreatedAt,
}

impl SortKey for CourseSortField {
    const ALL: &'static [Self] = &[
        CourseSortField::Name,
        CourseSortField::Code,
        CourseSortField::CreatedAt,
    ];

    fn key(self) -> &'static str {
        match self {
            CourseSortField::Name => "name",
            CourseSortField::Code => "code",
            CourseSortField::CreatedAt => "created_at",
        }
    }
}

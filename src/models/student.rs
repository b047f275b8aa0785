use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::student::{
    Student as DomainStudent, NewStudent as DomainNewStudent, UpdateStudent as DomainUpdateStudent,
};

/// Diesel model for [`crate::domain::student::Student`].
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::students)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub enrolled_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Student`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::students)]
pub struct NewStudent<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub enrolled_on: Option<NaiveDate>,
    pub notes: Option<&'a str>,
    pub is_active: bool,
}

/// Data used when updating a [`Student`] record. `None` clears the
/// corresponding column.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::students)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateStudent<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub enrolled_on: Option<NaiveDate>,
    pub notes: Option<&'a str>,
    pub is_active: bool,
}

impl From<Student> for DomainStudent {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            phone: student.phone,
            enrolled_on: student.enrolled_on,
            notes: student.notes,
            is_active: student.is_active,
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewStudent> for NewStudent<'a> {
    fn from(student: &'a DomainNewStudent) -> Self {
        Self {
            first_name: student.first_name.as_str(),
            last_name: student.last_name.as_str(),
            email: student.email.as_deref(),
            phone: student.phone.as_deref(),
            enrolled_on: student.enrolled_on,
            notes: student.notes.as_deref(),
            is_active: student.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateStudent> for UpdateStudent<'a> {
    fn from(student: &'a DomainUpdateStudent) -> Self {
        Self {
            first_name: student.first_name.as_str(),
            last_name: student.last_name.as_str(),
            email: student.email.as_deref(),
            phone: student.phone.as_deref(),
            enrolled_on: student.enrolled_on,
            notes: student.notes.as_deref(),
            is_active: student.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewStudent::new(
            "Alice".to_string(),
            "Becker".to_string(),
            Some("Alice.Becker@Example.com ".to_string()),
            Some(" +15551234567 ".to_string()),
            NaiveDate::from_ymd_opt(2025, 9, 1),
            Some("  ".to_string()),
        );
        let new: NewStudent = (&domain).into();
        assert_eq!(new.first_name, "Alice");
        assert_eq!(new.last_name, "Becker");
        assert_eq!(new.email, Some("alice.becker@example.com"));
        assert_eq!(new.phone, Some("+15551234567"));
        assert_eq!(new.enrolled_on, NaiveDate::from_ymd_opt(2025, 9, 1));
        assert_eq!(new.notes, None);
        assert!(new.is_active);
    }

    #[test]
    fn student_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_student = Student {
            id: 7,
            first_name: "Alice".to_string(),
            last_name: "Becker".to_string(),
            email: None,
            phone: None,
            enrolled_on: None,
            notes: Some("allergic to chalk".to_string()),
            is_active: false,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainStudent = db_student.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.full_name(), "Alice Becker");
        assert_eq!(domain.notes, Some("allergic to chalk".to_string()));
        assert!(!domain.is_active);
        assert_eq!(domain.created_at, now);
    }
}

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::course::{
    Course as DomainCourse, NewCourse as DomainNewCourse, UpdateCourse as DomainUpdateCourse,
};

/// Diesel model for [`crate::domain::course::Course`].
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::courses)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Course`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::courses)]
pub struct NewCourse<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub description: Option<&'a str>,
    pub department: Option<&'a str>,
    pub is_active: bool,
}

/// Data used when updating a [`Course`] record. `None` clears the
/// corresponding column.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::courses)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCourse<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub description: Option<&'a str>,
    pub department: Option<&'a str>,
    pub is_active: bool,
}

impl From<Course> for DomainCourse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            code: course.code,
            description: course.description,
            department: course.department,
            is_active: course.is_active,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCourse> for NewCourse<'a> {
    fn from(course: &'a DomainNewCourse) -> Self {
        Self {
            name: course.name.as_str(),
            code: course.code.as_str(),
            description: course.description.as_deref(),
            department: course.department.as_deref(),
            is_active: course.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateCourse> for UpdateCourse<'a> {
    fn from(course: &'a DomainUpdateCourse) -> Self {
        Self {
            name: course.name.as_str(),
            code: course.code.as_str(),
            description: course.description.as_deref(),
            department: course.department.as_deref(),
            is_active: course.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_uppercases_code() {
        let domain = DomainNewCourse::new(
            " Algebra I ".to_string(),
            "math-101".to_string(),
            None,
            Some("Mathematics".to_string()),
        );
        let new: NewCourse = (&domain).into();
        assert_eq!(new.name, "Algebra I");
        assert_eq!(new.code, "MATH-101");
        assert_eq!(new.description, None);
        assert_eq!(new.department, Some("Mathematics"));
    }
}

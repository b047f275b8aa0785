//! Diesel models representing parents and student links.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::parent::{
    Parent as DomainParent, NewParent as DomainNewParent, UpdateParent as DomainUpdateParent,
};

/// Diesel model for [`crate::domain::parent::Parent`].
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::parents)]
pub struct Parent {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Parent`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::parents)]
pub struct NewParent<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub is_active: bool,
}

/// Data used when updating a [`Parent`] record. `None` clears the
/// corresponding column.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::parents)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateParent<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub is_active: bool,
}

/// Insertable row of the student-parent link table.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::student_parent)]
pub struct NewStudentParent {
    pub student_id: i32,
    pub parent_id: i32,
}

impl From<Parent> for DomainParent {
    fn from(parent: Parent) -> Self {
        Self {
            id: parent.id,
            name: parent.name,
            email: parent.email,
            phone: parent.phone,
            address: parent.address,
            is_active: parent.is_active,
            created_at: parent.created_at,
            updated_at: parent.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewParent> for NewParent<'a> {
    fn from(parent: &'a DomainNewParent) -> Self {
        Self {
            name: parent.name.as_str(),
            email: parent.email.as_deref(),
            phone: parent.phone.as_deref(),
            address: parent.address.as_deref(),
            is_active: parent.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateParent> for UpdateParent<'a> {
    fn from(parent: &'a DomainUpdateParent) -> Self {
        Self {
            name: parent.name.as_str(),
            email: parent.email.as_deref(),
            phone: parent.phone.as_deref(),
            address: parent.address.as_deref(),
            is_active: parent.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_normalizes_email() {
        let domain = DomainNewParent::new(
            "Greta Becker".to_string(),
            Some("Greta@Example.COM".to_string()),
            Some("".to_string()),
            None,
        );
        let new: NewParent = (&domain).into();
        assert_eq!(new.name, "Greta Becker");
        assert_eq!(new.email, Some("greta@example.com"));
        assert_eq!(new.phone, None);
        assert_eq!(new.address, None);
        assert!(new.is_active);
    }
}

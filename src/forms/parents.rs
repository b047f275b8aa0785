use serde::Deserialize;
use validator::Validate;

use crate::domain::parent::{NewParent, UpdateParent};
use crate::forms::{FormError, de_opt_trimmed, normalize_phone};

#[derive(Deserialize, Validate)]
/// Form data for adding a parent or guardian.
pub struct AddParentForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub address: Option<String>,
}

impl TryFrom<AddParentForm> for NewParent {
    type Error = FormError;

    fn try_from(form: AddParentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewParent::new(
            form.name,
            form.email,
            normalize_phone(form.phone.as_deref())?,
            form.address,
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing parent.
pub struct SaveParentForm {
    /// Parent identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub address: Option<String>,
    pub is_active: bool,
}

impl TryFrom<&SaveParentForm> for UpdateParent {
    type Error = FormError;

    fn try_from(form: &SaveParentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdateParent::new(
            form.name.clone(),
            form.email.clone(),
            normalize_phone(form.phone.as_deref())?,
            form.address.clone(),
            form.is_active,
        ))
    }
}

#[derive(Deserialize)]
/// Form data for removing a parent.
pub struct DeleteParentForm {
    pub id: i32,
}

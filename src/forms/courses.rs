use serde::Deserialize;
use validator::Validate;

use crate::domain::course::{NewCourse, UpdateCourse};
use crate::forms::{FormError, de_opt_trimmed};

#[derive(Deserialize, Validate)]
/// Form data for creating a course.
pub struct AddCourseForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub department: Option<String>,
}

impl TryFrom<AddCourseForm> for NewCourse {
    type Error = FormError;

    fn try_from(form: AddCourseForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewCourse::new(
            form.name,
            form.code,
            form.description,
            form.department,
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing course.
pub struct SaveCourseForm {
    /// Course identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub code: String,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub department: Option<String>,
    pub is_active: bool,
}

impl TryFrom<&SaveCourseForm> for UpdateCourse {
    type Error = FormError;

    fn try_from(form: &SaveCourseForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdateCourse::new(
            form.name.clone(),
            form.code.clone(),
            form.description.clone(),
            form.department.clone(),
            form.is_active,
        ))
    }
}

#[derive(Deserialize)]
/// Form data for removing a course.
pub struct DeleteCourseForm {
    pub id: i32,
}

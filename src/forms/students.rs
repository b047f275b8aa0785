use std::io::Seek;

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::student::{NewStudent, UpdateStudent};
use crate::forms::{FormError, de_opt_trimmed, normalize_phone, parse_date, sanitize_notes};

#[derive(Deserialize, Validate)]
/// Form data for enrolling a single student.
pub struct AddStudentForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub phone: Option<String>,
    /// Enrollment date in `YYYY-MM-DD` format.
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub enrolled_on: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub notes: Option<String>,
}

impl TryFrom<AddStudentForm> for NewStudent {
    type Error = FormError;

    fn try_from(form: AddStudentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewStudent::new(
            form.first_name,
            form.last_name,
            form.email,
            normalize_phone(form.phone.as_deref())?,
            parse_date(form.enrolled_on.as_deref())?,
            sanitize_notes(form.notes.as_deref()),
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing student.
pub struct SaveStudentForm {
    /// Student identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub enrolled_on: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub notes: Option<String>,
    pub is_active: bool,
}

impl TryFrom<&SaveStudentForm> for UpdateStudent {
    type Error = FormError;

    fn try_from(form: &SaveStudentForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdateStudent::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.email.clone(),
            normalize_phone(form.phone.as_deref())?,
            parse_date(form.enrolled_on.as_deref())?,
            sanitize_notes(form.notes.as_deref()),
            form.is_active,
        ))
    }
}

#[derive(Deserialize)]
/// Form data for removing a student.
pub struct DeleteStudentForm {
    pub id: i32,
}

#[derive(Deserialize)]
/// Parent assignment submitted from the student page. Parsed with
/// `serde_html_form` because `parent_ids` arrives as repeated keys.
pub struct AssignParentsForm {
    pub student_id: i32,
    #[serde(default)]
    pub parent_ids: Vec<i32>,
}

/// One row of the students CSV upload.
#[derive(Debug, Deserialize)]
struct StudentCsvRow {
    first_name: String,
    last_name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    enrolled_on: Option<String>,
}

#[derive(MultipartForm)]
pub struct UploadStudentsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

impl UploadStudentsForm {
    /// Parses the uploaded CSV into enrollment payloads.
    ///
    /// Expects a header row of `first_name,last_name,email,phone,enrolled_on`.
    /// The first malformed row fails the whole upload with its row number,
    /// so a bad file never results in a half-imported roster.
    pub fn parse(&mut self) -> Result<Vec<NewStudent>, FormError> {
        let file = self.csv.file.as_file_mut();
        file.rewind()
            .map_err(|err| FormError::Upload(err.to_string()))?;

        let mut reader = csv::Reader::from_reader(file);
        let mut students = Vec::new();

        for (index, row) in reader.deserialize::<StudentCsvRow>().enumerate() {
            let row = row.map_err(|err| FormError::Csv(index + 1, err.to_string()))?;
            if row.first_name.trim().is_empty() || row.last_name.trim().is_empty() {
                return Err(FormError::Csv(index + 1, "missing student name".to_string()));
            }
            students.push(NewStudent::new(
                row.first_name,
                row.last_name,
                row.email,
                normalize_phone(row.phone.as_deref())
                    .map_err(|err| FormError::Csv(index + 1, err.to_string()))?,
                parse_date(row.enrolled_on.as_deref())
                    .map_err(|err| FormError::Csv(index + 1, err.to_string()))?,
                None,
            ));
        }

        Ok(students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn add_form_converts_to_domain() {
        let form = AddStudentForm {
            first_name: "Alice".to_string(),
            last_name: "Becker".to_string(),
            email: Some("Alice@Example.com".to_string()),
            phone: Some("+1 555 123 4567".to_string()),
            enrolled_on: Some("2025-09-01".to_string()),
            notes: Some("<b>front</b> row".to_string()),
        };
        let new_student = NewStudent::try_from(form).unwrap();
        assert_eq!(new_student.email.as_deref(), Some("alice@example.com"));
        assert_eq!(new_student.phone.as_deref(), Some("+15551234567"));
        assert_eq!(
            new_student.enrolled_on,
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
        assert_eq!(new_student.notes.as_deref(), Some("<b>front</b> row"));
    }

    #[test]
    fn add_form_rejects_empty_name() {
        let form = AddStudentForm {
            first_name: "".to_string(),
            last_name: "Becker".to_string(),
            email: None,
            phone: None,
            enrolled_on: None,
            notes: None,
        };
        assert!(matches!(
            NewStudent::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn add_form_rejects_bad_date() {
        let form = AddStudentForm {
            first_name: "Alice".to_string(),
            last_name: "Becker".to_string(),
            email: None,
            phone: None,
            enrolled_on: Some("01.09.2025".to_string()),
            notes: None,
        };
        assert!(matches!(
            NewStudent::try_from(form),
            Err(FormError::InvalidDate)
        ));
    }
}

//! Services handling student administration workflows.

use crate::domain::student::{NewStudent, UpdateStudent};
use crate::dto::students::StudentPageData;
use crate::forms::students::{
    AddStudentForm, AssignParentsForm, DeleteStudentForm, SaveStudentForm, UploadStudentsForm,
};
use crate::repository::{ParentReader, StudentReader, StudentWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads one student together with linked and assignable parents.
pub fn load_student_page<R>(repo: &R, student_id: i32) -> ServiceResult<StudentPageData>
where
    R: StudentReader + ParentReader + ?Sized,
{
    let student = repo
        .get_student_by_id(student_id)?
        .ok_or(ServiceError::NotFound)?;

    let parents = repo.list_parents_of_student(student_id)?;
    let available_parents = repo.list_all_parents()?;

    Ok(StudentPageData {
        student,
        parents,
        available_parents,
    })
}

/// Validates the enrollment form and persists a new student record.
pub fn add_student<R>(repo: &R, form: AddStudentForm) -> ServiceResult<()>
where
    R: StudentWriter + ?Sized,
{
    let new_student = NewStudent::try_from(form)?;

    repo.create_students(&[new_student]).map_err(|err| {
        log::error!("Failed to add a student: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Validates the edit form and updates the student record.
pub fn save_student<R>(repo: &R, form: &SaveStudentForm) -> ServiceResult<()>
where
    R: StudentWriter + ?Sized,
{
    let updates = UpdateStudent::try_from(form)?;

    repo.update_student(form.id, &updates)?;

    Ok(())
}

/// Removes a student and its parent links.
pub fn delete_student<R>(repo: &R, form: &DeleteStudentForm) -> ServiceResult<()>
where
    R: StudentWriter + ?Sized,
{
    repo.delete_student(form.id)?;

    Ok(())
}

/// Parses the uploaded CSV file and enrolls students in bulk. Returns the
/// number of created records.
pub fn upload_students<R>(repo: &R, form: &mut UploadStudentsForm) -> ServiceResult<usize>
where
    R: StudentWriter + ?Sized,
{
    let students = form.parse().map_err(|err| {
        log::error!("Failed to parse students CSV: {err}");
        ServiceError::Form(err.to_string())
    })?;

    if students.is_empty() {
        return Err(ServiceError::Form("The CSV file has no rows".to_string()));
    }

    let created = repo.create_students(&students).map_err(|err| {
        log::error!("Failed to import students: {err}");
        ServiceError::from(err)
    })?;

    Ok(created)
}

/// Replaces the set of parents linked to a student. Returns the student
/// id so the caller can redirect back to the student page.
///
/// The urlencoded body is parsed here because `parent_ids` arrives as
/// repeated keys, which `web::Form` cannot decode.
pub fn assign_parents<R>(repo: &R, body: &[u8]) -> ServiceResult<i32>
where
    R: StudentReader + ParentReader + StudentWriter + ?Sized,
{
    let form: AssignParentsForm = serde_html_form::from_bytes(body)
        .map_err(|_| ServiceError::Form("Invalid parent assignment".to_string()))?;

    repo.get_student_by_id(form.student_id)?
        .ok_or(ServiceError::NotFound)?;

    for parent_id in &form.parent_ids {
        if repo.get_parent_by_id(*parent_id)?.is_none() {
            return Err(ServiceError::Form("Unknown parent in selection".to_string()));
        }
    }

    repo.assign_parents_to_student(form.student_id, &form.parent_ids)?;

    Ok(form.student_id)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::student::{Student, StudentSortField};
    use crate::listing::{ListQuery, ListResult};
    use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::load_listing;
    use chrono::Utc;

    fn student(id: i32) -> Student {
        let now = Utc::now().naive_utc();
        Student {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: None,
            phone: None,
            enrolled_on: None,
            notes: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn listing_clamps_page_past_the_end() {
        let mut repo = MockRepository::new();
        // Page 4 no longer exists after deletions; the loader must retry
        // on the last remaining page.
        repo.expect_list_students()
            .withf(|filter| filter.page == 4)
            .times(1)
            .returning(|_| Ok(ListResult::new(vec![], 21)));
        repo.expect_list_students()
            .withf(|filter| filter.page == 3)
            .times(1)
            .returning(|_| Ok(ListResult::new(vec![student(21)], 21)));

        let query = ListQuery::<StudentSortField> {
            page: Some(4),
            ..ListQuery::default()
        };
        let page = load_listing(DEFAULT_ITEMS_PER_PAGE, query, |filter| {
            repo.list_students(filter)
        })
        .unwrap();

        assert_eq!(page.rows.page, 3);
        assert_eq!(page.rows.total_pages, 3);
        assert_eq!(page.rows.items.len(), 1);
    }

    #[test]
    fn listing_reports_empty_states() {
        let mut repo = MockRepository::new();
        repo.expect_list_students()
            .returning(|_| Ok(ListResult::empty()));

        let unfiltered = load_listing(
            DEFAULT_ITEMS_PER_PAGE,
            ListQuery::<StudentSortField>::default(),
            |filter| repo.list_students(filter),
        )
        .unwrap();
        assert_eq!(
            unfiltered.empty,
            Some(crate::listing::EmptyState::NoRecords)
        );

        let filtered_query = ListQuery::<StudentSortField> {
            q: Some("zz".to_string()),
            ..ListQuery::default()
        };
        let filtered = load_listing(DEFAULT_ITEMS_PER_PAGE, filtered_query, |filter| {
            repo.list_students(filter)
        })
        .unwrap();
        assert_eq!(filtered.empty, Some(crate::listing::EmptyState::NoMatches));
    }

    #[test]
    fn assign_parents_rejects_unknown_parent() {
        let mut repo = MockRepository::new();
        repo.expect_get_student_by_id()
            .returning(|id| Ok(Some(student(id))));
        repo.expect_get_parent_by_id().returning(|_| Ok(None));

        let body = b"student_id=1&parent_ids=7";
        let result = assign_parents(&repo, body);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn assign_parents_requires_existing_student() {
        let mut repo = MockRepository::new();
        repo.expect_get_student_by_id().returning(|_| Ok(None));

        let result = assign_parents(&repo, b"student_id=9");
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn delete_student_surfaces_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_student()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_student(&repo, &DeleteStudentForm { id: 42 });
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}

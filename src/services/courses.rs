//! Services handling course administration workflows.

use crate::domain::course::{Course, CourseSortField, NewCourse, UpdateCourse};
use crate::dto::listing::ListingPage;
use crate::forms::courses::{AddCourseForm, DeleteCourseForm, SaveCourseForm};
use crate::listing::ListQuery;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{CourseReader, CourseWriter};
use crate::services::{ServiceResult, load_listing};

/// Loads one page of the course catalog.
pub fn load_courses_page<R>(
    repo: &R,
    query: ListQuery<CourseSortField>,
) -> ServiceResult<ListingPage<Course, CourseSortField>>
where
    R: CourseReader + ?Sized,
{
    load_listing(DEFAULT_ITEMS_PER_PAGE, query, |filter| {
        repo.list_courses(filter)
    })
}

/// Validates the form and persists a new course.
pub fn add_course<R>(repo: &R, form: AddCourseForm) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    let new_course = NewCourse::try_from(form)?;

    repo.create_course(&new_course)?;

    Ok(())
}

/// Validates the form and updates the course record.
pub fn save_course<R>(repo: &R, form: &SaveCourseForm) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    let updates = UpdateCourse::try_from(form)?;

    repo.update_course(form.id, &updates)?;

    Ok(())
}

/// Removes a course from the catalog.
pub fn delete_course<R>(repo: &R, form: &DeleteCourseForm) -> ServiceResult<()>
where
    R: CourseWriter + ?Sized,
{
    repo.delete_course(form.id)?;

    Ok(())
}

use crate::domain::student::StudentSortField;
use crate::dto::main::{EntityCounts, IndexPageData};
use crate::listing::ListQuery;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{CourseReader, ParentReader, RoomReader, StudentReader};
use crate::services::{ServiceResult, load_listing};

/// Loads the student roster and record counts for the main index page.
pub fn load_index_page<R>(repo: &R, query: ListQuery<StudentSortField>) -> ServiceResult<IndexPageData>
where
    R: StudentReader + CourseReader + RoomReader + ParentReader + ?Sized,
{
    let listing = load_listing(DEFAULT_ITEMS_PER_PAGE, query, |filter| {
        repo.list_students(filter)
    })?;

    let counts = EntityCounts {
        students: repo.count_students()?,
        courses: repo.count_courses()?,
        rooms: repo.count_rooms()?,
        parents: repo.count_parents()?,
    };

    Ok(IndexPageData { listing, counts })
}

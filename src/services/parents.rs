//! Services handling parent administration workflows.

use crate::domain::parent::{NewParent, Parent, ParentSortField, UpdateParent};
use crate::dto::listing::ListingPage;
use crate::dto::parents::ParentPageData;
use crate::forms::parents::{AddParentForm, DeleteParentForm, SaveParentForm};
use crate::listing::ListQuery;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{ParentReader, ParentWriter};
use crate::services::{ServiceError, ServiceResult, load_listing};

/// Loads one page of the parent directory.
pub fn load_parents_page<R>(
    repo: &R,
    query: ListQuery<ParentSortField>,
) -> ServiceResult<ListingPage<Parent, ParentSortField>>
where
    R: ParentReader + ?Sized,
{
    load_listing(DEFAULT_ITEMS_PER_PAGE, query, |filter| {
        repo.list_parents(filter)
    })
}

/// Loads one parent with the students linked to them.
pub fn load_parent_page<R>(repo: &R, parent_id: i32) -> ServiceResult<ParentPageData>
where
    R: ParentReader + ?Sized,
{
    let parent = repo
        .get_parent_by_id(parent_id)?
        .ok_or(ServiceError::NotFound)?;

    let students = repo.list_students_of_parent(parent_id)?;

    Ok(ParentPageData { parent, students })
}

/// Validates the form and persists a new parent.
pub fn add_parent<R>(repo: &R, form: AddParentForm) -> ServiceResult<()>
where
    R: ParentWriter + ?Sized,
{
    let new_parent = NewParent::try_from(form)?;

    repo.create_parent(&new_parent)?;

    Ok(())
}

/// Validates the form and updates the parent record.
pub fn save_parent<R>(repo: &R, form: &SaveParentForm) -> ServiceResult<()>
where
    R: ParentWriter + ?Sized,
{
    let updates = UpdateParent::try_from(form)?;

    repo.update_parent(form.id, &updates)?;

    Ok(())
}

/// Removes a parent and any student links pointing at them.
pub fn delete_parent<R>(repo: &R, form: &DeleteParentForm) -> ServiceResult<()>
where
    R: ParentWriter + ?Sized,
{
    repo.delete_parent(form.id)?;

    Ok(())
}

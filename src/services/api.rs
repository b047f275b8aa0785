use crate::domain::student::{Student, StudentSortField};
use crate::dto::api::ApiListResponse;
use crate::listing::ListQuery;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::StudentReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of the student roster for API consumers.
///
/// Unlike the HTML pages, out-of-range parameters are rejected rather
/// than clamped, so `page=0` is a client error.
pub fn list_students<R>(
    repo: &R,
    params: ListQuery<StudentSortField>,
) -> ServiceResult<ApiListResponse<Student>>
where
    R: StudentReader + ?Sized,
{
    let filter = params
        .try_into_filter(DEFAULT_ITEMS_PER_PAGE)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let result = repo.list_students(&filter).map_err(ServiceError::from)?;

    let total_pages = result.total_pages(filter.per_page);

    Ok(ApiListResponse {
        total: result.total,
        page: filter.page,
        per_page: filter.per_page,
        total_pages,
        items: result.items,
    })
}

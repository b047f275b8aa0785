//! Application services sitting between HTTP routes and the repository.
//!
//! Services validate forms, normalize input, apply business rules and map
//! repository failures onto [`ServiceError`], leaving routes with nothing
//! to do but render or redirect.

use thiserror::Error;

use crate::dto::listing::ListingPage;
use crate::listing::{ListQuery, ListResult, SortKey};
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod courses;
pub mod main;
pub mod parents;
pub mod rooms;
pub mod students;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    /// A user-correctable problem with submitted data. The message is
    /// shown to the user verbatim.
    #[error("{0}")]
    Form(String),

    /// The change collides with existing data (duplicate code, record
    /// still in use).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(msg) => ServiceError::Conflict(msg),
            RepositoryError::ValidationError(msg) => ServiceError::Form(msg),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Form(format!("Form validation failed: {err}"))
    }
}

impl From<crate::forms::FormError> for ServiceError {
    fn from(err: crate::forms::FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

/// Fetches one page of a roster and packages it for rendering.
///
/// When the requested page has fallen past the end of the result set (the
/// last row of the last page was deleted, or rows shrank under a filter),
/// the page is clamped to the new last page and fetched again rather than
/// showing an empty table with live rows elsewhere.
pub(crate) fn load_listing<T, S, F>(
    per_page: usize,
    query: ListQuery<S>,
    fetch: F,
) -> ServiceResult<ListingPage<T, S>>
where
    S: SortKey + serde::Serialize,
    F: Fn(&crate::listing::ListFilter<S>) -> Result<ListResult<T>, RepositoryError>,
{
    let mut filter = query.clone().into_filter(per_page);
    let mut result = fetch(&filter)?;

    let total_pages = result.total_pages(per_page);
    if result.items.is_empty() && result.total > 0 && filter.page > total_pages {
        filter = filter.page(total_pages.max(1));
        result = fetch(&filter)?;
    }

    let rows = Paginated::from_total(result.items, filter.page, result.total, per_page);
    Ok(ListingPage::build(query, rows))
}

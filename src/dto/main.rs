use serde::Serialize;

use crate::domain::student::{Student, StudentSortField};
use crate::dto::listing::ListingPage;

/// Record counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EntityCounts {
    pub students: usize,
    pub courses: usize,
    pub rooms: usize,
    pub parents: usize,
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// The student roster shown on the index page.
    pub listing: ListingPage<Student, StudentSortField>,
    pub counts: EntityCounts,
}

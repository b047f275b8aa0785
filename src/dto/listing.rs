//! Generic rendering bundle shared by every roster page.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::listing::{self, EmptyState, ListQuery, SortKey, SortLink};
use crate::pagination::Paginated;

/// Everything a roster table needs: the rows, the echoed query, the
/// sort-header links, the href prefix for page links and the empty-state
/// marker.
#[derive(Debug, Serialize)]
#[serde(bound(serialize = "T: Serialize, S: Serialize"))]
pub struct ListingPage<T, S> {
    pub rows: Paginated<T>,
    pub query: ListQuery<S>,
    pub sort_links: BTreeMap<&'static str, SortLink>,
    pub page_prefix: String,
    pub empty: Option<EmptyState>,
}

impl<T, S: SortKey + Serialize> ListingPage<T, S> {
    pub fn build(query: ListQuery<S>, rows: Paginated<T>) -> Self {
        let empty = EmptyState::of(rows.total, query.is_filtered());
        Self {
            sort_links: listing::sort_links(&query),
            page_prefix: query.page_prefix(),
            empty,
            rows,
            query,
        }
    }

    /// A placeholder used when the list could not be loaded: no rows, no
    /// stale pagination, but the query (and therefore the search box and
    /// filter controls) intact so the user can retry.
    pub fn unavailable(query: ListQuery<S>) -> Self {
        Self {
            sort_links: listing::sort_links(&query),
            page_prefix: query.page_prefix(),
            empty: None,
            rows: Paginated::unavailable(),
            query,
        }
    }
}

//! Shared machinery for filterable, sortable, paginated entity lists.
//!
//! Every roster page (students, courses, rooms, parents) speaks the same
//! contract: a free-text search, a tri-state activity filter, an optional
//! sort column with a direction, and a 1-based page number. [`ListQuery`]
//! is the URL-facing shape of that contract, [`ListFilter`] the validated
//! form handed to repositories, and [`ListResult`] what repositories hand
//! back. The interactive state machine that drives debounced searching and
//! in-flight request tracking lives in [`state`].

pub mod state;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::listing::state::{Applied, FetchError, FetchTicket, ListState, Phase};

/// Tri-state activity filter shared by every roster.
///
/// `All` means "do not filter on the active flag at all", which is why the
/// mapping to a predicate goes through [`StatusFilter::as_flag`] rather than
/// a boolean.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// The predicate to apply to the `is_active` column, if any.
    pub fn as_flag(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_asc(self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// A sortable column of an entity list.
///
/// Implemented by the per-entity field enums in [`crate::domain`]; `ALL`
/// drives sort-link generation and `key` is the stable identifier used in
/// query strings and templates.
pub trait SortKey: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
}

/// A sort column paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<S> {
    pub field: S,
    pub direction: SortDirection,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListFilterError {
    #[error("page must be 1 or greater")]
    PageOutOfRange,
    #[error("page size must be 1 or greater")]
    PerPageOutOfRange,
}

/// Validated list parameters handed to the repository layer.
///
/// Built from a [`ListQuery`] or directly through the builder methods.
/// `page` is 1-based; `search` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter<S> {
    pub page: usize,
    pub per_page: usize,
    pub search: Option<String>,
    pub status: StatusFilter,
    pub sort: Option<Sort<S>>,
}

impl<S> ListFilter<S> {
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 1,
            per_page,
            search: None,
            status: StatusFilter::All,
            sort: None,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Sets the search needle. Whitespace is trimmed and an empty needle
    /// clears the search.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn sort(mut self, field: S, direction: SortDirection) -> Self {
        self.sort = Some(Sort { field, direction });
        self
    }

    pub fn validate(&self) -> Result<(), ListFilterError> {
        if self.page < 1 {
            return Err(ListFilterError::PageOutOfRange);
        }
        if self.per_page < 1 {
            return Err(ListFilterError::PerPageOutOfRange);
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) * self.per_page) as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    /// Whether anything beyond plain pagination narrows the result set.
    pub fn is_filtered(&self) -> bool {
        self.search.is_some() || !self.status.is_all()
    }
}

/// One page of rows plus the total row count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn total_pages(&self, per_page: usize) -> usize {
        self.total.div_ceil(per_page.max(1))
    }
}

/// What an empty roster page should say.
///
/// An unfiltered empty list means the school has no records yet; a filtered
/// one means nothing matched the current search or status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    NoRecords,
    NoMatches,
}

impl EmptyState {
    pub fn of(total: usize, filtered: bool) -> Option<Self> {
        (total == 0).then(|| {
            if filtered {
                EmptyState::NoMatches
            } else {
                EmptyState::NoRecords
            }
        })
    }
}

/// URL-facing list parameters, as they appear in a roster page's query
/// string (`?q=smith&status=active&sort=name&dir=desc&page=2`).
///
/// Omitted parameters keep their defaults, so a bare roster URL is valid.
/// `page=1` and `status=all` are dropped when serializing to keep hrefs
/// short and stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize",
    deserialize = "S: Deserialize<'de>"
))]
pub struct ListQuery<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "StatusFilter::is_all")]
    pub status: StatusFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl<S> Default for ListQuery<S> {
    fn default() -> Self {
        Self {
            q: None,
            status: StatusFilter::All,
            sort: None,
            dir: None,
            page: None,
        }
    }
}

impl<S: SortKey> ListQuery<S> {
    /// Builds the repository filter, forgiving out-of-range input.
    ///
    /// HTML pages use this: a hand-edited `page=0` is treated as page 1
    /// instead of failing the request. The strict counterpart is
    /// [`ListQuery::try_into_filter`].
    pub fn into_filter(self, per_page: usize) -> ListFilter<S> {
        let mut filter = ListFilter::new(per_page)
            .page(self.page.unwrap_or(1).max(1))
            .status(self.status);
        if let Some(q) = self.q {
            filter = filter.search(q);
        }
        if let Some(field) = self.sort {
            filter = filter.sort(field, self.dir.unwrap_or_default());
        }
        filter
    }

    /// Builds the repository filter, rejecting out-of-range input.
    ///
    /// The JSON API uses this so that `page=0` is a client error rather
    /// than silently clamped.
    pub fn try_into_filter(self, per_page: usize) -> Result<ListFilter<S>, ListFilterError> {
        if self.page == Some(0) {
            return Err(ListFilterError::PageOutOfRange);
        }
        Ok(self.into_filter(per_page))
    }

    /// The query after clicking the header of `field`.
    ///
    /// Clicking the column already sorted ascending flips it to descending
    /// and vice versa; clicking any other column sorts it ascending. Either
    /// way the page number resets to 1.
    pub fn toggle_sort(&self, field: S) -> Self {
        let direction = match (self.sort, self.dir.unwrap_or_default()) {
            (Some(current), dir) if current == field => dir.toggled(),
            _ => SortDirection::Asc,
        };
        Self {
            q: self.q.clone(),
            status: self.status,
            sort: Some(field),
            dir: Some(direction),
            page: None,
        }
    }

    /// The same query on a different page.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            q: self.q.clone(),
            status: self.status,
            sort: self.sort,
            dir: self.dir,
            page: (page > 1).then_some(page),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.q.as_deref().is_some_and(|q| !q.trim().is_empty()) || !self.status.is_all()
    }
}

impl<S: SortKey + Serialize> ListQuery<S> {
    /// Serializes the query for use in an href, without a leading `?`.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    /// Everything except the page number, ready to have `page=N` appended.
    ///
    /// Returns either an empty string or `"q=smith&sort=name&"` so that
    /// templates can emit `?{prefix}page={n}` without worrying about
    /// separators.
    pub fn page_prefix(&self) -> String {
        let mut prefix = self.with_page(1).query_string();
        if !prefix.is_empty() {
            prefix.push('&');
        }
        prefix
    }
}

/// A rendered sort-header link for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortLink {
    pub href: String,
    pub active: bool,
    pub descending: bool,
}

/// Sort-header links for every sortable column of `S`, keyed by
/// [`SortKey::key`].
pub fn sort_links<S: SortKey + Serialize>(query: &ListQuery<S>) -> BTreeMap<&'static str, SortLink> {
    S::ALL
        .iter()
        .map(|&field| {
            let next = query.toggle_sort(field);
            let active = query.sort == Some(field);
            let link = SortLink {
                href: format!("?{}", next.query_string()),
                active,
                descending: active && query.dir.unwrap_or_default() == SortDirection::Desc,
            };
            (field.key(), link)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum TestField {
        Name,
        CreatedAt,
    }

    impl SortKey for TestField {
        const ALL: &'static [Self] = &[TestField::Name, TestField::CreatedAt];

        fn key(self) -> &'static str {
            match self {
                TestField::Name => "name",
                TestField::CreatedAt => "created_at",
            }
        }
    }

    #[test]
    fn status_filter_maps_to_flag() {
        assert_eq!(StatusFilter::All.as_flag(), None);
        assert_eq!(StatusFilter::Active.as_flag(), Some(true));
        assert_eq!(StatusFilter::Inactive.as_flag(), Some(false));
    }

    #[test]
    fn filter_normalizes_search() {
        let filter = ListFilter::<TestField>::new(10).search("  smith ");
        assert_eq!(filter.search.as_deref(), Some("smith"));

        let filter = filter.search("   ");
        assert_eq!(filter.search, None);
    }

    #[test]
    fn filter_computes_offset_and_limit() {
        let filter = ListFilter::<TestField>::new(10).page(3);
        assert_eq!(filter.offset(), 20);
        assert_eq!(filter.limit(), 10);
    }

    #[test]
    fn filter_rejects_page_zero() {
        let filter = ListFilter::<TestField>::new(10).page(0);
        assert_eq!(filter.validate(), Err(ListFilterError::PageOutOfRange));
    }

    #[test]
    fn toggle_sort_flips_direction_on_same_field() {
        let query = ListQuery::<TestField>::default().toggle_sort(TestField::Name);
        assert_eq!(query.sort, Some(TestField::Name));
        assert_eq!(query.dir, Some(SortDirection::Asc));

        let query = query.toggle_sort(TestField::Name);
        assert_eq!(query.dir, Some(SortDirection::Desc));

        let query = query.toggle_sort(TestField::Name);
        assert_eq!(query.dir, Some(SortDirection::Asc));
    }

    #[test]
    fn toggle_sort_resets_direction_and_page_on_new_field() {
        let mut query = ListQuery::<TestField>::default().toggle_sort(TestField::Name);
        query = query.toggle_sort(TestField::Name);
        query.page = Some(4);

        let query = query.toggle_sort(TestField::CreatedAt);
        assert_eq!(query.sort, Some(TestField::CreatedAt));
        assert_eq!(query.dir, Some(SortDirection::Asc));
        assert_eq!(query.page, None);
    }

    #[test]
    fn query_string_omits_defaults() {
        let query = ListQuery::<TestField>::default();
        assert_eq!(query.query_string(), "");

        let query = ListQuery::<TestField> {
            q: Some("smith".to_string()),
            status: StatusFilter::Active,
            sort: Some(TestField::CreatedAt),
            dir: Some(SortDirection::Desc),
            page: Some(2),
        };
        assert_eq!(
            query.query_string(),
            "q=smith&status=active&sort=created_at&dir=desc&page=2"
        );
    }

    #[test]
    fn page_prefix_ends_with_separator_when_nonempty() {
        let query = ListQuery::<TestField>::default();
        assert_eq!(query.page_prefix(), "");

        let query = ListQuery::<TestField> {
            q: Some("smith".to_string()),
            page: Some(3),
            ..ListQuery::default()
        };
        assert_eq!(query.page_prefix(), "q=smith&");
    }

    #[test]
    fn into_filter_clamps_page_zero() {
        let query = ListQuery::<TestField> {
            page: Some(0),
            ..ListQuery::default()
        };
        assert_eq!(query.into_filter(10).page, 1);
    }

    #[test]
    fn try_into_filter_rejects_page_zero() {
        let query = ListQuery::<TestField> {
            page: Some(0),
            ..ListQuery::default()
        };
        assert_eq!(
            query.try_into_filter(10),
            Err(ListFilterError::PageOutOfRange)
        );
    }

    #[test]
    fn sort_links_mark_active_column() {
        let query = ListQuery::<TestField> {
            q: Some("smith".to_string()),
            sort: Some(TestField::Name),
            dir: Some(SortDirection::Asc),
            ..ListQuery::default()
        };
        let links = sort_links(&query);

        let name = &links["name"];
        assert!(name.active);
        assert!(!name.descending);
        assert_eq!(name.href, "?q=smith&sort=name&dir=desc");

        let created = &links["created_at"];
        assert!(!created.active);
        assert_eq!(created.href, "?q=smith&sort=created_at&dir=asc");
    }

    #[test]
    fn empty_state_depends_on_filtering() {
        assert_eq!(EmptyState::of(5, false), None);
        assert_eq!(EmptyState::of(0, false), Some(EmptyState::NoRecords));
        assert_eq!(EmptyState::of(0, true), Some(EmptyState::NoMatches));
    }
}

//! Interactive state machine behind a roster screen.
//!
//! [`ListState`] owns the committed [`ListFilter`], the raw search box
//! contents, and the rows last received, and hands out a [`FetchTicket`]
//! whenever the filter changes. The caller performs the fetch however it
//! likes and reports back through [`ListState::resolve`]; responses carrying
//! an outdated ticket are discarded, so a slow page-2 fetch can never
//! overwrite the page-3 rows that were requested after it.
//!
//! Time is passed in explicitly as [`Instant`] values, which keeps the
//! debounce logic deterministic under test.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::listing::{EmptyState, ListFilter, ListResult, SortDirection, StatusFilter};

/// How long the search box must stay quiet before its value is committed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Identifies one issued fetch. Only the most recently issued ticket is
/// accepted by [`ListState::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchTicket {
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// Whether a resolved response belonged to the current fetch or to one that
/// has since been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Stale,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Why a fetch failed, in terms a roster screen can act on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("invalid list parameters: {0}")]
    Validation(String),
}

/// Pagination facts derived from the last confirmed row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Driver state for one entity list.
///
/// `S` is the entity's sort-field enum, `T` the row type.
#[derive(Debug, Clone)]
pub struct ListState<S, T> {
    filter: ListFilter<S>,
    search_input: String,
    debounce_due: Option<Instant>,
    seq: u64,
    phase: Phase,
    rows: Vec<T>,
    total: usize,
    // The last confirmed total belongs to the committed filter. Cleared
    // whenever search, status or sort changes, so pagination controls
    // disappear until fresh counts arrive instead of showing stale math.
    count_current: bool,
    error: Option<FetchError>,
}

impl<S: Copy + Eq, T> ListState<S, T> {
    pub fn new(per_page: usize) -> Self {
        Self {
            filter: ListFilter::new(per_page),
            search_input: String::new(),
            debounce_due: None,
            seq: 0,
            phase: Phase::Idle,
            rows: Vec::new(),
            total: 0,
            count_current: false,
            error: None,
        }
    }

    pub fn filter(&self) -> &ListFilter<S> {
        &self.filter
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Records a keystroke in the search box and restarts the debounce
    /// timer. Nothing is committed until [`ListState::poll`] observes the
    /// timer expiring.
    pub fn input_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        self.debounce_due = Some(now + SEARCH_DEBOUNCE);
    }

    /// Advances the debounce clock. Returns a ticket when a quiet period
    /// has elapsed and the settled search value actually changes the
    /// committed filter.
    pub fn poll(&mut self, now: Instant) -> Option<FetchTicket> {
        let due = self.debounce_due?;
        if now < due {
            return None;
        }
        self.debounce_due = None;

        let settled = self.search_input.trim();
        let settled = (!settled.is_empty()).then(|| settled.to_string());
        if settled == self.filter.search {
            return None;
        }
        self.filter.search = settled;
        self.filter.page = 1;
        self.count_current = false;
        Some(self.begin())
    }

    /// Switches the activity filter. Returns `None` when nothing changed.
    pub fn set_status(&mut self, status: StatusFilter) -> Option<FetchTicket> {
        if self.filter.status == status {
            return None;
        }
        self.filter.status = status;
        self.filter.page = 1;
        self.count_current = false;
        Some(self.begin())
    }

    /// Applies the sort-toggle rules: a repeated column flips direction, a
    /// new column starts ascending, and the page resets either way.
    pub fn toggle_sort(&mut self, field: S) -> FetchTicket {
        let direction = match self.filter.sort {
            Some(sort) if sort.field == field => sort.direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.filter = self.filter.clone().sort(field, direction).page(1);
        self.count_current = false;
        self.begin()
    }

    /// Navigates to `page`, clamped to the known page range. Returns `None`
    /// when no confirmed count exists yet or the page does not change.
    pub fn set_page(&mut self, page: usize) -> Option<FetchTicket> {
        let info = self.pagination()?;
        let page = page.clamp(1, info.total_pages.max(1));
        if page == self.filter.page {
            return None;
        }
        self.filter.page = page;
        Some(self.begin())
    }

    /// Re-issues the current filter, typically to retry after a failure or
    /// to pick up rows changed elsewhere.
    pub fn refresh(&mut self) -> FetchTicket {
        self.begin()
    }

    fn begin(&mut self) -> FetchTicket {
        self.seq += 1;
        self.phase = Phase::Loading;
        self.error = None;
        FetchTicket { seq: self.seq }
    }

    /// Applies a fetch outcome. A response whose ticket is not the latest
    /// one issued is reported as [`Applied::Stale`] and ignored entirely.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<ListResult<T>, FetchError>,
    ) -> Applied {
        if ticket.seq != self.seq {
            return Applied::Stale;
        }
        match outcome {
            Ok(result) => {
                self.rows = result.items;
                self.total = result.total;
                self.count_current = true;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.error = Some(err);
                self.phase = Phase::Failed;
            }
        }
        Applied::Current
    }

    /// Pagination facts, or `None` while the row count is unknown or no
    /// longer matches the committed filter.
    pub fn pagination(&self) -> Option<PageInfo> {
        if !self.count_current {
            return None;
        }
        let total_pages = self.total.div_ceil(self.filter.per_page.max(1));
        let page = self.filter.page.clamp(1, total_pages.max(1));
        Some(PageInfo {
            page,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        })
    }

    /// When a confirmed count leaves the current page past the end (for
    /// example after deleting the last row of the last page), the page to
    /// clamp back to.
    pub fn needs_clamp(&self) -> Option<usize> {
        let info = self.pagination()?;
        (self.filter.page > info.total_pages.max(1)).then(|| info.total_pages.max(1))
    }

    /// What an empty result should say, once a fetch has confirmed one.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.phase != Phase::Ready {
            return None;
        }
        EmptyState::of(self.total, self.filter.is_filtered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
        Email,
    }

    fn state() -> ListState<Field, &'static str> {
        ListState::new(10)
    }

    fn rows(count: usize, total: usize) -> ListResult<&'static str> {
        ListResult::new(vec!["row"; count], total)
    }

    #[test]
    fn search_commits_after_quiet_period() {
        let mut state = state();
        let t0 = Instant::now();

        state.input_search("s", t0);
        assert_eq!(state.poll(t0 + Duration::from_millis(100)), None);

        // The second keystroke restarts the timer.
        state.input_search("sm", t0 + Duration::from_millis(100));
        assert_eq!(state.poll(t0 + Duration::from_millis(350)), None);

        let ticket = state.poll(t0 + Duration::from_millis(100) + SEARCH_DEBOUNCE);
        assert!(ticket.is_some());
        assert_eq!(state.filter().search.as_deref(), Some("sm"));
        assert_eq!(state.filter().page, 1);
        assert!(state.is_loading());

        // Nothing left to commit.
        assert_eq!(state.poll(t0 + Duration::from_millis(1000)), None);
    }

    #[test]
    fn settling_on_committed_value_fetches_nothing() {
        let mut state = state();
        let t0 = Instant::now();

        state.input_search("smith", t0);
        let ticket = state.poll(t0 + SEARCH_DEBOUNCE).expect("search commits");
        state.resolve(ticket, Ok(rows(1, 1)));

        // Same needle modulo whitespace.
        state.input_search("  smith  ", t0 + Duration::from_secs(1));
        assert_eq!(state.poll(t0 + Duration::from_secs(2)), None);
        assert_eq!(state.phase(), Phase::Ready);

        // Clearing the box is a real change again.
        state.input_search("", t0 + Duration::from_secs(3));
        let ticket = state.poll(t0 + Duration::from_secs(4)).expect("search cleared");
        assert_eq!(state.filter().search, None);
        state.resolve(ticket, Ok(rows(1, 1)));

        // Whitespace over an empty committed search is not a change.
        state.input_search("   ", t0 + Duration::from_secs(5));
        assert_eq!(state.poll(t0 + Duration::from_secs(6)), None);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = state();

        let first = state.refresh();
        let second = state.toggle_sort(Field::Name);
        assert_ne!(first, second);

        assert_eq!(state.resolve(first, Ok(rows(10, 40))), Applied::Stale);
        assert!(state.rows().is_empty());
        assert!(state.is_loading());

        assert_eq!(state.resolve(second, Ok(rows(3, 3))), Applied::Current);
        assert_eq!(state.rows().len(), 3);
        assert_eq!(state.phase(), Phase::Ready);

        // A stale failure must not surface an error either.
        let outdated = state.refresh();
        let current = state.refresh();
        assert_eq!(
            state.resolve(outdated, Err(FetchError::Network("timeout".to_string()))),
            Applied::Stale
        );
        assert!(state.error().is_none());
        state.resolve(current, Ok(rows(3, 3)));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn toggle_sort_cycles_direction_and_resets_page() {
        let mut state = state();
        let ticket = state.refresh();
        state.resolve(ticket, Ok(rows(10, 50)));
        let ticket = state.set_page(3).expect("page changes");
        state.resolve(ticket, Ok(rows(10, 50)));

        state.toggle_sort(Field::Name);
        let sort = state.filter().sort.expect("sort set");
        assert_eq!(sort.field, Field::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(state.filter().page, 1);

        state.toggle_sort(Field::Name);
        assert_eq!(
            state.filter().sort.expect("sort set").direction,
            SortDirection::Desc
        );

        // Switching columns starts ascending again.
        state.toggle_sort(Field::Email);
        let sort = state.filter().sort.expect("sort set");
        assert_eq!(sort.field, Field::Email);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn status_change_resets_page_and_skips_noops() {
        let mut state = state();
        let ticket = state.refresh();
        state.resolve(ticket, Ok(rows(10, 50)));
        let ticket = state.set_page(2).expect("page changes");
        state.resolve(ticket, Ok(rows(10, 50)));

        assert!(state.set_status(StatusFilter::Active).is_some());
        assert_eq!(state.filter().status, StatusFilter::Active);
        assert_eq!(state.filter().page, 1);

        assert!(state.set_status(StatusFilter::Active).is_none());
    }

    #[test]
    fn set_page_waits_for_count_and_clamps() {
        let mut state = state();
        assert!(state.set_page(2).is_none());

        let ticket = state.refresh();
        state.resolve(ticket, Ok(rows(10, 25)));
        let info = state.pagination().expect("count confirmed");
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next);
        assert!(!info.has_prev);

        let ticket = state.set_page(7).expect("page changes");
        assert_eq!(state.filter().page, 3);
        state.resolve(ticket, Ok(rows(5, 25)));

        let info = state.pagination().expect("count confirmed");
        assert!(info.has_prev);
        assert!(!info.has_next);

        assert!(state.set_page(3).is_none());
    }

    #[test]
    fn pagination_hides_while_count_is_stale() {
        let mut state = state();
        let ticket = state.refresh();
        state.resolve(ticket, Ok(rows(10, 30)));
        assert!(state.pagination().is_some());

        let ticket = state.toggle_sort(Field::Name);
        assert!(state.pagination().is_none());

        state.resolve(ticket, Ok(rows(10, 12)));
        assert_eq!(state.pagination().expect("count confirmed").total_pages, 2);
    }

    #[test]
    fn page_clamps_back_after_rows_disappear() {
        let mut state = state();
        let ticket = state.refresh();
        state.resolve(ticket, Ok(rows(10, 25)));
        let ticket = state.set_page(3).expect("page changes");
        state.resolve(ticket, Ok(rows(5, 25)));
        assert!(state.needs_clamp().is_none());

        // Rows were deleted elsewhere and the count collapsed under us.
        let ticket = state.refresh();
        state.resolve(ticket, Ok(rows(0, 5)));
        assert_eq!(state.needs_clamp(), Some(1));

        let ticket = state.set_page(1).expect("page changes");
        assert_eq!(state.filter().page, 1);
        state.resolve(ticket, Ok(rows(5, 5)));
        assert!(state.needs_clamp().is_none());
    }

    #[test]
    fn empty_state_depends_on_committed_filter() {
        let mut state = state();
        assert!(state.empty_state().is_none());

        let ticket = state.refresh();
        assert!(state.empty_state().is_none());
        state.resolve(ticket, Ok(ListResult::empty()));
        assert_eq!(state.empty_state(), Some(EmptyState::NoRecords));

        let t0 = Instant::now();
        state.input_search("nobody", t0);
        let ticket = state.poll(t0 + SEARCH_DEBOUNCE).expect("search commits");
        assert!(state.empty_state().is_none());
        state.resolve(ticket, Ok(ListResult::empty()));
        assert_eq!(state.empty_state(), Some(EmptyState::NoMatches));
    }

    #[test]
    fn failure_keeps_rows_and_retry_clears_error() {
        let mut state = state();
        let ticket = state.refresh();
        state.resolve(ticket, Ok(rows(10, 30)));

        let ticket = state.refresh();
        assert_eq!(
            state.resolve(ticket, Err(FetchError::Network("timeout".to_string()))),
            Applied::Current
        );
        assert_eq!(state.phase(), Phase::Failed);
        assert!(state.error().is_some());
        // The last good rows stay on screen next to the error.
        assert_eq!(state.rows().len(), 10);

        state.refresh();
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }
}

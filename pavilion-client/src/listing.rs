//! Stock-variant listing state machine
//!
//! Binds UI state (search text, page, sort, filters) to query
//! parameters and tracks the render state of one listing instance.
//! The listing is server-paginated and server-sorted: every parameter
//! change issues a new fetch instead of re-slicing locally, because
//! the dataset size is unbounded.
//!
//! Fetches run outside the controller (spawned tasks in the
//! dashboard, awaited inline in tests) and come back through
//! [`StockListing::commit`] with their ticket sequence. Only the most
//! recently issued sequence commits; superseded responses are
//! dropped, so the view never regresses to an earlier page's data
//! after a later one was requested.

use std::time::Instant;

use shared::models::StockVariantItem;
use shared::query::{SortBy, SortOrder, StockVariantQuery};
use shared::response::Paginated;

use crate::debounce::Debouncer;

/// Render state of the listing
///
/// The four states are mutually exclusive: the view renders exactly
/// one of spinner, rows, empty placeholder, or error placeholder.
#[derive(Debug, Clone)]
pub enum ViewState {
    /// Fetch in flight, nothing to show yet
    Loading,
    /// Settled with at least one row
    Loaded(Paginated<StockVariantItem>),
    /// Settled with zero rows
    Empty,
    /// Fetch failed; carries the raw error text
    Error(String),
}

impl ViewState {
    fn settle(page: Paginated<StockVariantItem>) -> Self {
        if page.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Loaded(page)
        }
    }
}

/// Handle for one issued fetch
///
/// The sequence number is the stale-response guard: a result only
/// commits while its ticket is still the latest issued one.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: StockVariantQuery,
}

/// One stock-variant listing instance
pub struct StockListing {
    query: StockVariantQuery,
    state: ViewState,
    latest_seq: u64,
    search_debounce: Debouncer<String>,
    selected: Option<usize>,
}

impl StockListing {
    pub fn new() -> Self {
        Self {
            query: StockVariantQuery::default(),
            state: ViewState::Loading,
            latest_seq: 0,
            search_debounce: Debouncer::default(),
            selected: None,
        }
    }

    pub fn query(&self) -> &StockVariantQuery {
        &self.query
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    // ========== Fetch protocol ==========

    /// Issue a new fetch for the current parameters
    ///
    /// Supersedes any fetch still in flight and re-enters `Loading`.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.state = ViewState::Loading;
        FetchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        }
    }

    /// Show a cached page while the refetch settles
    ///
    /// Stale-while-revalidate: only replaces the loading spinner,
    /// never a settled state.
    pub fn show_cached(&mut self, page: Paginated<StockVariantItem>) {
        if matches!(self.state, ViewState::Loading) {
            self.selected = None;
            self.state = ViewState::settle(page);
        }
    }

    /// Commit a settled fetch result
    ///
    /// Returns `false` (and changes nothing) when the ticket was
    /// superseded by a later parameter change.
    pub fn commit(
        &mut self,
        seq: u64,
        result: Result<Paginated<StockVariantItem>, String>,
    ) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "dropping superseded fetch result");
            return false;
        }
        self.selected = None;
        self.state = match result {
            Ok(page) => ViewState::settle(page),
            Err(message) => ViewState::Error(message),
        };
        true
    }

    // ========== Parameter mutators ==========

    /// Jump to a page (1-based); no-op when already there
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        let page = page.max(1);
        if page == self.query.page {
            return None;
        }
        self.query.page = page;
        Some(self.begin_fetch())
    }

    /// Advance one page, bounded by the last settled page count
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        match &self.state {
            ViewState::Loaded(page) if self.query.page < page.meta.total_pages => {
                self.set_page(self.query.page + 1)
            }
            _ => None,
        }
    }

    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        if self.query.page > 1 {
            self.set_page(self.query.page - 1)
        } else {
            None
        }
    }

    /// Change the page size, returning to the first page
    pub fn set_limit(&mut self, limit: u32) -> Option<FetchTicket> {
        let limit = limit.max(1);
        if limit == self.query.limit {
            return None;
        }
        self.query.limit = limit;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    /// Sort by a column; a repeated column toggles the direction
    pub fn sort_by(&mut self, column: SortBy) -> FetchTicket {
        if self.query.sort_by == column {
            self.query.sort_order = self.query.sort_order.toggle();
        } else {
            self.query.sort_by = column;
            self.query.sort_order = SortOrder::Asc;
        }
        self.begin_fetch()
    }

    /// Cycle to the next sortable column
    pub fn cycle_sort(&mut self) -> FetchTicket {
        let next = self.query.sort_by.next();
        self.query.sort_by = next;
        self.query.sort_order = SortOrder::Asc;
        self.begin_fetch()
    }

    pub fn set_warehouse(&mut self, warehouse_id: Option<String>) -> Option<FetchTicket> {
        if self.query.warehouse_id == warehouse_id {
            return None;
        }
        self.query.warehouse_id = warehouse_id;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    pub fn set_product(&mut self, product_id: Option<String>) -> Option<FetchTicket> {
        if self.query.product_id == product_id {
            return None;
        }
        self.query.product_id = product_id;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    pub fn set_category(&mut self, category_id: Option<String>) -> Option<FetchTicket> {
        if self.query.category_id == category_id {
            return None;
        }
        self.query.category_id = category_id;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    // ========== Search ==========

    /// Feed a raw keystroke value into the debouncer
    ///
    /// The fetch fires on [`tick`](Self::tick) after the input has
    /// been quiet for the debounce window.
    pub fn type_search(&mut self, raw: &str, now: Instant) {
        self.search_debounce.arm(raw.to_string(), now);
    }

    /// Poll the debouncer and commit a settled search term
    ///
    /// A distinct committed value updates the query and resets the
    /// page to 1 exactly once; re-committing the same value does
    /// nothing.
    pub fn tick(&mut self, now: Instant) -> Option<FetchTicket> {
        let committed = self.search_debounce.poll(now)?;
        let committed = if committed.is_empty() {
            None
        } else {
            Some(committed)
        };
        if committed == self.query.search {
            return None;
        }
        self.query.search = committed;
        self.query.page = 1;
        Some(self.begin_fetch())
    }

    // ========== Row selection (local UI state) ==========

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&StockVariantItem> {
        match (&self.state, self.selected) {
            (ViewState::Loaded(page), Some(index)) => page.data.get(index),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        if let ViewState::Loaded(page) = &self.state {
            let last = page.data.len().saturating_sub(1);
            self.selected = Some(match self.selected {
                Some(index) => (index + 1).min(last),
                None => 0,
            });
        }
    }

    pub fn select_prev(&mut self) {
        if let ViewState::Loaded(_) = &self.state {
            self.selected = Some(match self.selected {
                Some(index) => index.saturating_sub(1),
                None => 0,
            });
        }
    }
}

impl Default for StockListing {
    fn default() -> Self {
        Self::new()
    }
}

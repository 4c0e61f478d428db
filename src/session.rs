//! Per-view browsing state.
//!
//! A [`BrowseSession`] is what a view holds while it is mounted: the current
//! filter, the pagination window, and the filtered results. It is the only
//! place filter state and pagination state meet, and it enforces the rule
//! that any filter edit sends the window back to the first page.
//!
//! Sessions are plain values. Two open views are two independent sessions
//! over the same borrowed catalog.
//!
//! # Example
//!
//! ```
//! use predictbase::catalog::seed;
//! use predictbase::filter::MarketFilter;
//! use predictbase::pagination::PaginationWindow;
//! use predictbase::session::BrowseSession;
//!
//! let markets = seed::markets();
//! let mut session =
//!     BrowseSession::new(&markets, MarketFilter::landing(), PaginationWindow::default());
//!
//! session.load_more();
//! session.update(|filter| filter.search = "bitcoin".into());
//! assert!(session.window().is_first_page());
//! ```

use serde::Serialize;
use tracing::debug;

use crate::filter::{apply, Criteria};
use crate::pagination::PaginationWindow;

/// One rendered page of a session.
#[derive(Debug, Serialize)]
pub struct Page<'a, T> {
    /// The visible prefix of the filtered results.
    pub items: &'a [&'a T],
    /// Number of filtered results, visible or not.
    pub total: usize,
    pub has_more: bool,
}

impl<T> Page<'_, T> {
    /// Nothing matched the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Filter and pagination state for one mounted view.
#[derive(Debug, Clone)]
pub struct BrowseSession<'c, T, F> {
    catalog: &'c [T],
    defaults: F,
    filter: F,
    window: PaginationWindow,
    results: Vec<&'c T>,
}

impl<'c, T, F> BrowseSession<'c, T, F>
where
    F: Criteria<T> + Clone,
{
    /// Mount a view over `catalog`, starting from `defaults` on the first page.
    pub fn new(catalog: &'c [T], defaults: F, mut window: PaginationWindow) -> Self {
        window.reset();
        let results = apply(catalog, &defaults);
        Self {
            catalog,
            filter: defaults.clone(),
            defaults,
            window,
            results,
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }

    #[must_use]
    pub const fn window(&self) -> PaginationWindow {
        self.window
    }

    /// Edit the filter, recompute the results and return to the first page.
    pub fn update(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.filter);
        self.recompute();
    }

    /// Replace the whole filter. Same reset rule as [`update`](Self::update).
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.recompute();
    }

    /// Restore the view's default filter and first page.
    pub fn reset_filters(&mut self) {
        self.filter = self.defaults.clone();
        self.recompute();
    }

    /// Reveal one more increment of results. The filter is untouched.
    pub fn load_more(&mut self) {
        self.window.grow();
        debug!(
            visible = self.window.visible_count(),
            total = self.results.len(),
            "window grown"
        );
    }

    /// All filtered results in catalog order.
    #[must_use]
    pub fn results(&self) -> &[&'c T] {
        &self.results
    }

    /// The currently visible prefix of the results.
    #[must_use]
    pub fn visible(&self) -> &[&'c T] {
        self.window.visible(&self.results)
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.window.has_more(self.results.len())
    }

    /// Nothing matched; the view should show its empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether the current filter differs from the view's default.
    #[must_use]
    pub fn is_filtered(&self) -> bool
    where
        F: PartialEq,
    {
        self.filter != self.defaults
    }

    #[must_use]
    pub fn page(&self) -> Page<'_, T> {
        Page {
            items: self.visible(),
            total: self.results.len(),
            has_more: self.has_more(),
        }
    }

    fn recompute(&mut self) {
        self.results = apply(self.catalog, &self.filter);
        self.window.reset();
        debug!(
            matched = self.results.len(),
            catalog = self.catalog.len(),
            "filter recomputed"
        );
    }
}

//! Multi-criteria filter engine.
//!
//! Each view has one filter-state type implementing [`Criteria`]. A filter
//! state combines the shared predicates from [`predicate`] conjunctively: an
//! entity survives only when every active predicate holds. Predicates left at
//! their wildcard value are vacuously true.
//!
//! [`apply`] is a pure, stable filter. The same catalog and criteria always
//! yield the same sequence in catalog order, so callers may memoize it.
//!
//! # Example
//!
//! ```
//! use predictbase::catalog::seed;
//! use predictbase::domain::MarketStatus;
//! use predictbase::filter::{apply, MarketFilter};
//!
//! let markets = seed::markets();
//! let trending = MarketFilter {
//!     status: Some(MarketStatus::Trending),
//!     ..MarketFilter::default()
//! };
//!
//! let results = apply(markets.iter(), &trending);
//! assert!(results.iter().all(|m| m.status() == MarketStatus::Trending));
//! ```

mod league;
mod market;
pub mod predicate;
mod trader;

pub use league::LeagueFilter;
pub use market::MarketFilter;
pub use trader::{Timeframe, TraderFilter};

/// A filter state that can decide whether one entity passes.
pub trait Criteria<T> {
    /// True iff every active predicate holds for `item`.
    fn matches(&self, item: &T) -> bool;

    /// True when no predicate restricts the result set, so every item
    /// matches. [`apply`] skips per-item checks in that case.
    fn is_unrestricted(&self) -> bool;
}

/// Filter `items` by `criteria`, preserving their order.
///
/// Accepts any iterator of borrowed entities so a previous result can be
/// filtered again without cloning records.
pub fn apply<'a, T, C, I>(items: I, criteria: &C) -> Vec<&'a T>
where
    T: 'a,
    C: Criteria<T> + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    let results: Vec<&'a T> = if criteria.is_unrestricted() {
        items.into_iter().collect()
    } else {
        items
            .into_iter()
            .filter(|item| criteria.matches(*item))
            .collect()
    };
    tracing::trace!(matched = results.len(), "filter applied");
    results
}

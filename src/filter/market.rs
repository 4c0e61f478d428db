use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::predicate::{
    is_wildcard, matches_categorical, matches_enum, matches_numeric_floor, matches_search,
};
use super::Criteria;
use crate::domain::{Market, MarketStatus, Volume};

/// Filter state of the markets view.
///
/// `Default` is fully unrestricted. The markets view itself opens on the
/// trending tab, see [`MarketFilter::landing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketFilter {
    /// Matched against the market title.
    pub search: String,
    pub status: Option<MarketStatus>,
    /// Exact category, or empty / `"all"` for any.
    pub category: String,
    /// Minimum traded volume; zero disables the floor.
    pub min_volume: Volume,
}

impl MarketFilter {
    /// The filter the markets view starts from and resets to.
    #[must_use]
    pub fn landing() -> Self {
        Self {
            status: Some(MarketStatus::Trending),
            ..Self::default()
        }
    }
}

impl Criteria<Market> for MarketFilter {
    fn matches(&self, market: &Market) -> bool {
        matches_search(&[market.title()], &self.search)
            && matches_enum(&market.status(), self.status.as_ref())
            && matches_categorical(market.category(), &self.category)
            && matches_numeric_floor(market.volume(), self.min_volume)
    }

    fn is_unrestricted(&self) -> bool {
        self.search.is_empty()
            && self.status.is_none()
            && is_wildcard(&self.category)
            && self.min_volume <= Decimal::ZERO
    }
}

//! Market records shown in the markets view.
//!
//! - [`Market`] - A prediction market listing with its traded volume
//! - [`MarketStatus`] - Lifecycle tag used by the status tabs

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::MarketId;
use super::money::Volume;

/// Lifecycle tag of a market listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketStatus {
    Trending,
    New,
    ClosingSoon,
    Resolved,
}

impl MarketStatus {
    pub const ALL: [Self; 4] = [
        Self::Trending,
        Self::New,
        Self::ClosingSoon,
        Self::Resolved,
    ];

    /// The kebab-case spelling used in filters and catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::New => "new",
            Self::ClosingSoon => "closing-soon",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "market status",
                value: s.to_string(),
                expected: "trending, new, closing-soon, resolved",
            })
    }
}

/// A prediction market listing.
///
/// Records are immutable once loaded; the filter engine only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    id: MarketId,
    title: String,
    status: MarketStatus,
    category: String,
    volume: Volume,
}

impl Market {
    /// Create a new market without validation.
    pub fn new(
        id: MarketId,
        title: impl Into<String>,
        status: MarketStatus,
        category: impl Into<String>,
        volume: Volume,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            category: category.into(),
            volume,
        }
    }

    /// Create a new market with domain invariant validation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeVolume`] if `volume` is below zero.
    pub fn try_new(
        id: MarketId,
        title: impl Into<String>,
        status: MarketStatus,
        category: impl Into<String>,
        volume: Volume,
    ) -> Result<Self, DomainError> {
        let market = Self::new(id, title, status, category, volume);
        market.validate()?;
        Ok(market)
    }

    /// Check the record invariants. Used for records decoded from files.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.volume < Decimal::ZERO {
            return Err(DomainError::NegativeVolume {
                volume: self.volume,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> &MarketId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn status(&self) -> MarketStatus {
        self.status
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }
}

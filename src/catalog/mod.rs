//! Immutable entity catalogs.
//!
//! A [`Catalog`] is built once, validated, and then only borrowed. Order is
//! the order records were supplied in, which is the order every filtered
//! result preserves.
//!
//! Catalogs come from the built-in [`seed`] data or from a JSON file via
//! [`CatalogSet::load`].

pub mod seed;

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{DomainError, League, LeagueId, Market, MarketId, Trader, TraderId};
use crate::error::Result;

/// A record that can live in a catalog.
pub trait Entity {
    type Id: Eq + Hash + Display;

    /// Name used in error messages.
    const KIND: &'static str;

    fn entity_id(&self) -> Self::Id;

    /// Check per-record invariants.
    fn validate(&self) -> std::result::Result<(), DomainError>;
}

impl Entity for Market {
    type Id = MarketId;
    const KIND: &'static str = "market";

    fn entity_id(&self) -> MarketId {
        self.id().clone()
    }

    fn validate(&self) -> std::result::Result<(), DomainError> {
        Market::validate(self)
    }
}

impl Entity for Trader {
    type Id = TraderId;
    const KIND: &'static str = "trader";

    fn entity_id(&self) -> TraderId {
        self.id().clone()
    }

    fn validate(&self) -> std::result::Result<(), DomainError> {
        Trader::validate(self)
    }
}

impl Entity for League {
    type Id = LeagueId;
    const KIND: &'static str = "league";

    fn entity_id(&self) -> LeagueId {
        self.id()
    }

    fn validate(&self) -> std::result::Result<(), DomainError> {
        League::validate(self)
    }
}

/// An ordered, validated, read-only collection of entities.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: Entity> Catalog<T> {
    /// Build a catalog, checking each record and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first record invariant violation, or
    /// [`DomainError::DuplicateId`] when two records share an id.
    pub fn try_new(items: Vec<T>) -> std::result::Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            let id = item.entity_id();
            if seen.contains(&id) {
                return Err(DomainError::DuplicateId {
                    kind: T::KIND,
                    id: id.to_string(),
                });
            }
            seen.insert(id);
        }
        Ok(Self { items })
    }
}

impl<T> Catalog<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Trader ranks are unique across the leaderboard.
fn check_unique_ranks(traders: &Catalog<Trader>) -> std::result::Result<(), DomainError> {
    let mut ranks = HashSet::with_capacity(traders.len());
    for trader in traders {
        if !ranks.insert(trader.rank()) {
            return Err(DomainError::DuplicateRank { rank: trader.rank() });
        }
    }
    Ok(())
}

/// On-disk layout of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogFile {
    markets: Vec<Market>,
    traders: Vec<Trader>,
    leagues: Vec<League>,
}

/// The three catalogs the views browse.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSet {
    pub markets: Catalog<Market>,
    pub traders: Catalog<Trader>,
    pub leagues: Catalog<League>,
}

impl CatalogSet {
    /// Validate and assemble the three catalogs.
    pub fn try_new(
        markets: Vec<Market>,
        traders: Vec<Trader>,
        leagues: Vec<League>,
    ) -> std::result::Result<Self, DomainError> {
        let traders = Catalog::try_new(traders)?;
        check_unique_ranks(&traders)?;
        Ok(Self {
            markets: Catalog::try_new(markets)?,
            traders,
            leagues: Catalog::try_new(leagues)?,
        })
    }

    /// The built-in demo catalogs.
    pub fn seeded() -> std::result::Result<Self, DomainError> {
        Self::try_new(seed::markets(), seed::traders(), seed::leagues())
    }

    /// Load catalogs from a JSON file with `markets`, `traders` and
    /// `leagues` arrays. Missing arrays are empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            markets = catalog.markets.len(),
            traders = catalog.traders.len(),
            leagues = catalog.leagues.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse catalogs from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::try_new(file.markets, file.traders, file.leagues)?)
    }
}

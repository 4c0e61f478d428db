//! Builders for catalog records used across tests.
//!
//! Fields a test does not care about get fixed placeholder values so
//! assertions can focus on the attributes being filtered.

use crate::domain::{
    League, LeagueId, LeagueStatus, Market, MarketId, MarketStatus, Pnl, RiskScore, Trader,
    TraderId, Volume,
};

/// Create a [`Market`] with the filterable fields set.
pub fn market(
    id: &str,
    title: &str,
    status: MarketStatus,
    category: &str,
    volume: Volume,
) -> Market {
    Market::new(MarketId::from(id), title, status, category, volume)
}

/// Create `n` markets `m0..m{n-1}` sharing one status and category.
pub fn markets(n: usize, status: MarketStatus, category: &str) -> Vec<Market> {
    (0..n)
        .map(|i| {
            market(
                &format!("m{i}"),
                &format!("Market {i}"),
                status,
                category,
                Volume::from(i as u64 * 100),
            )
        })
        .collect()
}

/// Create a [`Trader`] with ten copiers.
pub fn trader(
    id: &str,
    rank: u32,
    username: &str,
    pnl: Pnl,
    risk: RiskScore,
    category: &str,
) -> Trader {
    Trader::new(TraderId::from(id), rank, username, pnl, risk, category, 10)
}

/// Create a half-full [`League`] with the filterable fields set.
pub fn league(
    id: u32,
    name: &str,
    description: &str,
    category: &str,
    status: LeagueStatus,
) -> League {
    League::builder(LeagueId::new(id), name)
        .description(description)
        .category(category)
        .participants(10)
        .max_participants(20)
        .status(status)
        .build()
}

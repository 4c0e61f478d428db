//! Catalog record types and their invariants.

pub mod error;
pub mod id;
pub mod league;
pub mod market;
pub mod money;
pub mod trader;

pub use error::DomainError;
pub use id::{LeagueId, MarketId, TraderId};
pub use league::{League, LeagueBuilder, LeagueStatus};
pub use market::{Market, MarketStatus};
pub use money::{Pnl, Volume};
pub use trader::{RiskScore, Trader};

//! Leaderboard traders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::TraderId;
use super::money::Pnl;

/// Risk tier assigned to a trader's book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskScore {
    Low,
    Medium,
    High,
}

impl RiskScore {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskScore {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|risk| risk.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "risk score",
                value: s.to_string(),
                expected: "Low, Medium, High",
            })
    }
}

/// A trader on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trader {
    id: TraderId,
    rank: u32,
    username: String,
    pnl: Pnl,
    risk_score: RiskScore,
    category: String,
    copiers: u32,
}

impl Trader {
    pub fn new(
        id: TraderId,
        rank: u32,
        username: impl Into<String>,
        pnl: Pnl,
        risk_score: RiskScore,
        category: impl Into<String>,
        copiers: u32,
    ) -> Self {
        Self {
            id,
            rank,
            username: username.into(),
            pnl,
            risk_score,
            category: category.into(),
            copiers,
        }
    }

    /// Create a trader, rejecting a zero rank.
    pub fn try_new(
        id: TraderId,
        rank: u32,
        username: impl Into<String>,
        pnl: Pnl,
        risk_score: RiskScore,
        category: impl Into<String>,
        copiers: u32,
    ) -> Result<Self, DomainError> {
        let trader = Self::new(id, rank, username, pnl, risk_score, category, copiers);
        trader.validate()?;
        Ok(trader)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.rank == 0 {
            return Err(DomainError::ZeroRank);
        }
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> &TraderId {
        &self.id
    }

    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub const fn pnl(&self) -> Pnl {
        self.pnl
    }

    #[must_use]
    pub const fn risk_score(&self) -> RiskScore {
        self.risk_score
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn copiers(&self) -> u32 {
        self.copiers
    }
}

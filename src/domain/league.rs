//! Prediction leagues.
//!
//! A league has enough descriptive fields that it is assembled through
//! [`LeagueBuilder`] rather than a positional constructor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::LeagueId;

/// Entry state of a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueStatus {
    Open,
    Active,
    Closed,
}

impl LeagueStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::Active, Self::Closed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }

    /// Badge text shown on a league card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open for Entry",
            Self::Active => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for LeagueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeagueStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "league status",
                value: s.to_string(),
                expected: "open, active, closed",
            })
    }
}

/// A competitive league grouping several markets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    id: LeagueId,
    name: String,
    description: String,
    category: String,
    entry_fee: String,
    prize_pool: String,
    participants: u32,
    max_participants: u32,
    time_remaining: String,
    status: LeagueStatus,
    creator: String,
    duration: String,
    markets: Vec<String>,
}

impl League {
    /// Start building a league with the given id and name.
    pub fn builder(id: LeagueId, name: impl Into<String>) -> LeagueBuilder {
        LeagueBuilder::new(id, name)
    }

    /// Check capacity invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_participants == 0 {
            return Err(DomainError::ZeroCapacity);
        }
        if self.participants > self.max_participants {
            return Err(DomainError::ParticipantsExceedCapacity {
                participants: self.participants,
                max: self.max_participants,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> LeagueId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Entry fee with its currency label, e.g. `"100 $PROPHET"`.
    #[must_use]
    pub fn entry_fee(&self) -> &str {
        &self.entry_fee
    }

    #[must_use]
    pub fn prize_pool(&self) -> &str {
        &self.prize_pool
    }

    #[must_use]
    pub const fn participants(&self) -> u32 {
        self.participants
    }

    #[must_use]
    pub const fn max_participants(&self) -> u32 {
        self.max_participants
    }

    /// Remaining seats.
    #[must_use]
    pub const fn open_seats(&self) -> u32 {
        self.max_participants.saturating_sub(self.participants)
    }

    #[must_use]
    pub fn time_remaining(&self) -> &str {
        &self.time_remaining
    }

    #[must_use]
    pub const fn status(&self) -> LeagueStatus {
        self.status
    }

    #[must_use]
    pub fn creator(&self) -> &str {
        &self.creator
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn markets(&self) -> &[String] {
        &self.markets
    }
}

/// Builder for [`League`].
///
/// Unset text fields default to empty strings, `max_participants` to 1 and
/// `status` to [`LeagueStatus::Open`].
#[derive(Debug, Clone)]
pub struct LeagueBuilder {
    league: League,
}

impl LeagueBuilder {
    pub fn new(id: LeagueId, name: impl Into<String>) -> Self {
        Self {
            league: League {
                id,
                name: name.into(),
                description: String::new(),
                category: String::new(),
                entry_fee: String::new(),
                prize_pool: String::new(),
                participants: 0,
                max_participants: 1,
                time_remaining: String::new(),
                status: LeagueStatus::Open,
                creator: String::new(),
                duration: String::new(),
                markets: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.league.description = description.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.league.category = category.into();
        self
    }

    #[must_use]
    pub fn entry_fee(mut self, fee: impl Into<String>) -> Self {
        self.league.entry_fee = fee.into();
        self
    }

    #[must_use]
    pub fn prize_pool(mut self, pool: impl Into<String>) -> Self {
        self.league.prize_pool = pool.into();
        self
    }

    #[must_use]
    pub fn participants(mut self, participants: u32) -> Self {
        self.league.participants = participants;
        self
    }

    #[must_use]
    pub fn max_participants(mut self, max: u32) -> Self {
        self.league.max_participants = max;
        self
    }

    #[must_use]
    pub fn time_remaining(mut self, remaining: impl Into<String>) -> Self {
        self.league.time_remaining = remaining.into();
        self
    }

    #[must_use]
    pub fn status(mut self, status: LeagueStatus) -> Self {
        self.league.status = status;
        self
    }

    #[must_use]
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.league.creator = creator.into();
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.league.duration = duration.into();
        self
    }

    #[must_use]
    pub fn markets<I, S>(mut self, markets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.league.markets = markets.into_iter().map(Into::into).collect();
        self
    }

    /// Build the league without validation.
    #[must_use]
    pub fn build(self) -> League {
        self.league
    }

    /// Build the league, checking capacity invariants.
    pub fn try_build(self) -> Result<League, DomainError> {
        self.league.validate()?;
        Ok(self.league)
    }
}

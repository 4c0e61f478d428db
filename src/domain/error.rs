//! Domain validation errors for catalog records.
//!
//! These errors are returned by `try_new` constructors and by catalog
//! construction when a record breaks one of the catalog invariants.
//!
//! # Examples
//!
//! ```
//! use predictbase::domain::{DomainError, League, LeagueId, LeagueStatus};
//!
//! let result = League::builder(LeagueId::new(1), "Overbooked")
//!     .participants(120)
//!     .max_participants(100)
//!     .status(LeagueStatus::Open)
//!     .try_build();
//!
//! assert!(matches!(result, Err(DomainError::ParticipantsExceedCapacity { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Market volume is never negative.
    #[error("volume must be non-negative, got {volume}")]
    NegativeVolume {
        /// The invalid volume that was provided.
        volume: rust_decimal::Decimal,
    },

    /// Leaderboard ranks start at 1.
    #[error("trader rank must be positive")]
    ZeroRank,

    /// A league must admit at least one participant.
    #[error("max participants must be positive")]
    ZeroCapacity,

    #[error("participants {participants} exceed capacity {max}")]
    ParticipantsExceedCapacity { participants: u32, max: u32 },

    /// Two records in one catalog share an identifier.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    /// Two traders claim the same leaderboard rank.
    #[error("duplicate trader rank {rank}")]
    DuplicateRank { rank: u32 },

    /// A status, risk tier or timeframe spelling was not recognised.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Pagination sizes are positive.
    #[error("{field} must be positive")]
    ZeroPageSize { field: &'static str },
}

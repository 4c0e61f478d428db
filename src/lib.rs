//! Predictbase - browse prediction markets, trader leaderboards and leagues.
//!
//! The crate is built around one engine shared by three views: a
//! multi-criteria filter over an immutable catalog, and a "load more"
//! pagination window over the filtered results.
//!
//! # Architecture
//!
//! - **`catalog`** - Immutable, validated collections of markets, traders and
//!   leagues, from built-in seed data or a JSON file
//! - **`filter`** - Reusable predicates and the per-view filter states that
//!   combine them conjunctively
//! - **`pagination`** - The visible-count window with grow and reset
//! - **`session`** - Per-view state tying a filter to a window, resetting
//!   the window whenever the filter changes
//!
//! # Modules
//!
//! - [`catalog`] - Entity catalogs and seed data
//! - [`cli`] - Command-line front end
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Market, trader and league records
//! - [`error`] - Error types for the crate
//! - [`filter`] - Predicates and filter engine
//! - [`pagination`] - Pagination window
//! - [`session`] - Browse sessions
//!
//! # Example
//!
//! ```
//! use predictbase::catalog::CatalogSet;
//! use predictbase::domain::RiskScore;
//! use predictbase::filter::TraderFilter;
//! use predictbase::pagination::PaginationWindow;
//! use predictbase::session::BrowseSession;
//!
//! let catalogs = CatalogSet::seeded().unwrap();
//! let mut leaderboard = BrowseSession::new(
//!     catalogs.traders.as_slice(),
//!     TraderFilter::default(),
//!     PaginationWindow::default(),
//! );
//!
//! leaderboard.update(|filter| filter.risk = Some(RiskScore::Low));
//! for trader in leaderboard.visible() {
//!     assert_eq!(trader.risk_score(), RiskScore::Low);
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod session;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

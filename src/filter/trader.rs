use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::predicate::{is_wildcard, matches_categorical, matches_enum, matches_search};
use super::Criteria;
use crate::domain::{DomainError, RiskScore, Trader};

/// Leaderboard time window.
///
/// Catalog records carry a single lifetime P&L, so every timeframe selects
/// the whole leaderboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    #[default]
    AllTime,
    ThisYear,
    ThisMonth,
    ThisWeek,
}

impl Timeframe {
    pub const ALL: [Self; 4] = [
        Self::AllTime,
        Self::ThisYear,
        Self::ThisMonth,
        Self::ThisWeek,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllTime => "all-time",
            Self::ThisYear => "this-year",
            Self::ThisMonth => "this-month",
            Self::ThisWeek => "this-week",
        }
    }

    /// Always true: there is no per-window data to restrict on.
    #[must_use]
    pub const fn includes(self, _trader: &Trader) -> bool {
        true
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVariant {
                kind: "timeframe",
                value: s.to_string(),
                expected: "all-time, this-year, this-month, this-week",
            })
    }
}

/// Filter state of the leaderboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderFilter {
    /// Matched against the username.
    pub search: String,
    pub category: String,
    pub timeframe: Timeframe,
    pub risk: Option<RiskScore>,
}

impl Criteria<Trader> for TraderFilter {
    fn matches(&self, trader: &Trader) -> bool {
        matches_search(&[trader.username()], &self.search)
            && matches_categorical(trader.category(), &self.category)
            && self.timeframe.includes(trader)
            && matches_enum(&trader.risk_score(), self.risk.as_ref())
    }

    fn is_unrestricted(&self) -> bool {
        // Every timeframe includes every trader.
        self.search.is_empty() && is_wildcard(&self.category) && self.risk.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::trader;
    use rust_decimal_macros::dec;

    #[test]
    fn timeframe_never_restricts() {
        let t = trader("t1", 1, "CryptoWhale", dec!(125000), RiskScore::Medium, "crypto");
        for timeframe in Timeframe::ALL {
            let filter = TraderFilter {
                timeframe,
                ..TraderFilter::default()
            };
            assert!(filter.matches(&t));
            assert!(filter.is_unrestricted());
        }
    }

    #[test]
    fn risk_and_category_combine() {
        let t = trader("t1", 1, "CryptoWhale", dec!(125000), RiskScore::Medium, "crypto");
        let filter = TraderFilter {
            category: "crypto".into(),
            risk: Some(RiskScore::Medium),
            ..TraderFilter::default()
        };
        assert!(filter.matches(&t));

        let high = TraderFilter {
            risk: Some(RiskScore::High),
            ..filter
        };
        assert!(!high.matches(&t));
    }

    #[test]
    fn timeframe_round_trips_through_str() {
        assert_eq!("this-month".parse::<Timeframe>().unwrap(), Timeframe::ThisMonth);
        assert!("yesterday".parse::<Timeframe>().is_err());
    }
}

use serde::{Deserialize, Serialize};

use super::predicate::{
    is_wildcard, matches_categorical_ignore_case, matches_enum, matches_search,
};
use super::Criteria;
use crate::domain::{League, LeagueStatus};

/// Filter state of the leagues view.
///
/// Category selectors are lowercase ids (`"crypto"`) while catalog records
/// carry display names (`"Crypto"`), so the category test ignores case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueFilter {
    /// Matched against the league name and description.
    pub search: String,
    pub category: String,
    /// Status tab; `None` is the "all leagues" tab.
    pub status: Option<LeagueStatus>,
}

impl Criteria<League> for LeagueFilter {
    fn matches(&self, league: &League) -> bool {
        matches_search(&[league.name(), league.description()], &self.search)
            && matches_categorical_ignore_case(league.category(), &self.category)
            && matches_enum(&league.status(), self.status.as_ref())
    }

    fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && is_wildcard(&self.category) && self.status.is_none()
    }
}

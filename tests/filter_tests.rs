//! Filter engine properties over all three views.

mod support;

use rust_decimal_macros::dec;

use predictbase::catalog::seed;
use predictbase::domain::{League, Market, MarketStatus, RiskScore, Trader};
use predictbase::filter::{apply, Criteria, LeagueFilter, MarketFilter, Timeframe, TraderFilter};

use support::{
    league_filters, market_filters, sample_leagues, sample_traders, seven_markets,
    trader_filters,
};

/// True when `sub` appears in `full` in the same relative order.
fn is_subsequence<T: PartialEq>(sub: &[&T], full: &[T]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|item| item == *wanted))
}

fn ids(markets: &[&Market]) -> Vec<String> {
    markets.iter().map(|m| m.id().to_string()).collect()
}

#[test]
fn default_filters_are_identity() {
    let markets = seven_markets();
    let traders = sample_traders();
    let leagues = sample_leagues();

    let all_markets = apply(&markets, &MarketFilter::default());
    assert_eq!(all_markets, markets.iter().collect::<Vec<_>>());

    let all_traders = apply(&traders, &TraderFilter::default());
    assert_eq!(all_traders, traders.iter().collect::<Vec<_>>());

    let all_leagues = apply(&leagues, &LeagueFilter::default());
    assert_eq!(all_leagues, leagues.iter().collect::<Vec<_>>());
}

#[test]
fn empty_catalog_yields_empty_results() {
    let markets: Vec<Market> = Vec::new();
    for filter in market_filters() {
        assert!(apply(&markets, &filter).is_empty());
    }
    let traders: Vec<Trader> = Vec::new();
    assert!(apply(&traders, &TraderFilter::default()).is_empty());
    let leagues: Vec<League> = Vec::new();
    assert!(apply(&leagues, &LeagueFilter::default()).is_empty());
}

#[test]
fn results_are_ordered_subsequences() {
    let markets = seven_markets();
    for filter in market_filters() {
        let results = apply(&markets, &filter);
        assert!(is_subsequence(&results, &markets), "{filter:?}");
    }

    let traders = sample_traders();
    for filter in trader_filters() {
        assert!(is_subsequence(&apply(&traders, &filter), &traders));
    }

    let leagues = sample_leagues();
    for filter in league_filters() {
        assert!(is_subsequence(&apply(&leagues, &filter), &leagues));
    }
}

#[test]
fn filtering_twice_changes_nothing() {
    let markets = seven_markets();
    for filter in market_filters() {
        let once = apply(&markets, &filter);
        let twice = apply(once.iter().copied(), &filter);
        assert_eq!(once, twice, "{filter:?}");
    }

    let traders = sample_traders();
    for filter in trader_filters() {
        let once = apply(&traders, &filter);
        assert_eq!(apply(once.iter().copied(), &filter), once);
    }
}

/// On these fixtures every restricting filter drops at least one record,
/// so "unrestricted" and "returns the whole catalog" coincide.
fn assert_unrestricted_iff_identity<T, C>(catalog: &[T], filters: &[C])
where
    T: PartialEq + std::fmt::Debug,
    C: Criteria<T> + std::fmt::Debug,
{
    for filter in filters {
        let everything = apply(catalog, filter).len() == catalog.len();
        assert_eq!(filter.is_unrestricted(), everything, "{filter:?}");
        let checked: Vec<&T> = catalog.iter().filter(|item| filter.matches(*item)).collect();
        assert_eq!(apply(catalog, filter), checked, "{filter:?}");
    }
}

#[test]
fn unrestricted_filters_return_whole_catalog() {
    assert_unrestricted_iff_identity(&seven_markets(), &market_filters());
    assert_unrestricted_iff_identity(&sample_traders(), &trader_filters());
    assert_unrestricted_iff_identity(&sample_leagues(), &league_filters());
}

#[test]
fn any_timeframe_alone_is_unrestricted() {
    for timeframe in Timeframe::ALL {
        let filter = TraderFilter {
            timeframe,
            ..TraderFilter::default()
        };
        assert!(filter.is_unrestricted());
        assert_eq!(apply(&sample_traders(), &filter).len(), 4);
    }
}

#[test]
fn filtering_is_deterministic() {
    let markets = seed::markets();
    for filter in market_filters() {
        assert_eq!(apply(&markets, &filter), apply(&markets, &filter));
    }
}

#[test]
fn every_result_matches_and_every_match_is_kept() {
    let markets = seven_markets();
    for filter in market_filters() {
        let results = apply(&markets, &filter);
        let expected = markets.iter().filter(|m| filter.matches(*m)).count();
        assert_eq!(results.len(), expected);
        assert!(results.iter().all(|m| filter.matches(*m)));
    }
}

#[test]
fn raising_volume_floor_never_grows_results() {
    let markets = seed::markets();
    let mut previous = usize::MAX;
    for floor in [dec!(0), dec!(50000), dec!(200000), dec!(1000000), dec!(10000000)] {
        let filter = MarketFilter {
            min_volume: floor,
            ..MarketFilter::default()
        };
        let count = apply(&markets, &filter).len();
        assert!(count <= previous, "floor {floor} grew results");
        previous = count;
    }
    assert_eq!(previous, 0);
}

#[test]
fn narrowing_a_wildcard_never_grows_results() {
    let markets = seven_markets();
    let base = apply(&markets, &MarketFilter::default()).len();
    for category in ["crypto", "finance", "sports", "politics", "weather", "none"] {
        let narrowed = MarketFilter {
            category: category.into(),
            ..MarketFilter::default()
        };
        assert!(apply(&markets, &narrowed).len() <= base);
    }

    let traders = sample_traders();
    let base = apply(&traders, &TraderFilter::default()).len();
    for risk in RiskScore::ALL {
        let narrowed = TraderFilter {
            risk: Some(risk),
            ..TraderFilter::default()
        };
        assert!(apply(&traders, &narrowed).len() <= base);
    }
}

#[test]
fn trending_status_selects_three_of_seven_in_order() {
    let markets = seven_markets();
    let results = apply(&markets, &MarketFilter::landing());
    assert_eq!(ids(&results), ["m1", "m3", "m7"]);
    assert!(results
        .iter()
        .all(|m| m.status() == MarketStatus::Trending));
}

#[test]
fn no_match_search_is_empty() {
    let filter = MarketFilter {
        search: "xyz-no-match".into(),
        ..MarketFilter::default()
    };
    assert!(apply(&seven_markets(), &filter).is_empty());
    assert!(apply(&seed::markets(), &filter).is_empty());
}

#[test]
fn predicates_combine_conjunctively() {
    let markets = seven_markets();
    let filter = MarketFilter {
        category: "crypto".into(),
        min_volume: dec!(1000),
        ..MarketFilter::default()
    };
    // m5 is crypto but too small, m4 is large but politics.
    assert_eq!(ids(&apply(&markets, &filter)), ["m1", "m7"]);
}

#[test]
fn trader_search_ignores_case() {
    let traders = sample_traders();
    let filter = TraderFilter {
        search: "WHALE".into(),
        ..TraderFilter::default()
    };
    let names: Vec<&str> = apply(&traders, &filter)
        .iter()
        .map(|t| t.username())
        .collect();
    assert_eq!(names, ["CryptoWhale", "whale_watcher"]);
}

#[test]
fn league_search_reads_name_and_description() {
    let leagues = sample_leagues();
    let by_description = LeagueFilter {
        search: "swing".into(),
        ..LeagueFilter::default()
    };
    let by_name = LeagueFilter {
        search: "hoops".into(),
        ..LeagueFilter::default()
    };
    assert_eq!(apply(&leagues, &by_description)[0].name(), "Election Night");
    assert_eq!(apply(&leagues, &by_name)[0].name(), "Hoops");
}

#[test]
fn league_category_and_status_tab_combine() {
    let leagues = sample_leagues();
    let filter = LeagueFilter {
        category: "SPORTS".into(),
        status: Some(predictbase::domain::LeagueStatus::Open),
        ..LeagueFilter::default()
    };
    let names: Vec<&str> = apply(&leagues, &filter).iter().map(|l| l.name()).collect();
    assert_eq!(names, ["F1 Cup"]);
}

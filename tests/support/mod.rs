#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal_macros::dec;
use tempfile::TempDir;

use predictbase::domain::{League, LeagueStatus, Market, MarketStatus, RiskScore, Trader};
use predictbase::filter::{LeagueFilter, MarketFilter, Timeframe, TraderFilter};
use predictbase::testkit::domain::{league, market, trader};

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Seven markets, three trending, interleaved with other statuses.
pub fn seven_markets() -> Vec<Market> {
    vec![
        market("m1", "Bitcoin above $100k", MarketStatus::Trending, "crypto", dec!(5000)),
        market("m2", "Fed holds rates", MarketStatus::New, "finance", dec!(800)),
        market("m3", "Chiefs repeat", MarketStatus::Trending, "sports", dec!(1200)),
        market("m4", "Senate flips", MarketStatus::ClosingSoon, "politics", dec!(9000)),
        market("m5", "ETH ETF approved", MarketStatus::Resolved, "crypto", dec!(300)),
        market("m6", "Rain in London", MarketStatus::New, "weather", dec!(50)),
        market("m7", "Dogecoin to $1", MarketStatus::Trending, "crypto", dec!(2500)),
    ]
}

pub fn sample_traders() -> Vec<Trader> {
    vec![
        trader("t1", 1, "CryptoWhale", dec!(125000), RiskScore::Medium, "crypto"),
        trader("t2", 2, "SportsOracle", dec!(98000), RiskScore::Low, "sports"),
        trader("t3", 3, "whale_watcher", dec!(50000), RiskScore::High, "crypto"),
        trader("t4", 4, "MacroMaven", dec!(-1200), RiskScore::Low, "finance"),
    ]
}

pub fn sample_leagues() -> Vec<League> {
    vec![
        league(
            1,
            "Crypto Majors",
            "Trade the biggest crypto markets",
            "Crypto",
            LeagueStatus::Open,
        ),
        league(2, "F1 Cup", "Predict Formula 1 race outcomes", "Sports", LeagueStatus::Open),
        league(3, "Election Night", "Call the swing states", "Politics", LeagueStatus::Active),
        league(4, "Hoops", "Basketball brackets", "Sports", LeagueStatus::Closed),
    ]
}

/// A spread of market filters from loose to tight, used for property checks.
pub fn market_filters() -> Vec<MarketFilter> {
    vec![
        MarketFilter::default(),
        MarketFilter::landing(),
        MarketFilter {
            search: "coin".into(),
            ..MarketFilter::default()
        },
        MarketFilter {
            category: "crypto".into(),
            ..MarketFilter::default()
        },
        MarketFilter {
            min_volume: dec!(1000),
            ..MarketFilter::default()
        },
        MarketFilter {
            search: "o".into(),
            status: Some(MarketStatus::Trending),
            category: "crypto".into(),
            min_volume: dec!(2500),
        },
        MarketFilter {
            search: "xyz-no-match".into(),
            ..MarketFilter::default()
        },
    ]
}

pub fn trader_filters() -> Vec<TraderFilter> {
    vec![
        TraderFilter::default(),
        TraderFilter {
            search: "WHALE".into(),
            ..TraderFilter::default()
        },
        TraderFilter {
            category: "crypto".into(),
            risk: Some(RiskScore::High),
            ..TraderFilter::default()
        },
        TraderFilter {
            timeframe: Timeframe::ThisWeek,
            ..TraderFilter::default()
        },
    ]
}

pub fn league_filters() -> Vec<LeagueFilter> {
    vec![
        LeagueFilter::default(),
        LeagueFilter {
            search: "formula".into(),
            ..LeagueFilter::default()
        },
        LeagueFilter {
            category: "sports".into(),
            status: Some(LeagueStatus::Open),
            ..LeagueFilter::default()
        },
    ]
}

pub const CATALOG_JSON: &str = r#"{
    "markets": [
        {"id": "m1", "title": "Bitcoin above $100k", "status": "trending",
         "category": "crypto", "volume": 5000},
        {"id": "m2", "title": "Fed holds rates", "status": "new",
         "category": "finance", "volume": "800.50"}
    ],
    "traders": [
        {"id": "t1", "rank": 1, "username": "CryptoWhale",
         "pnl": "125000", "riskScore": "Medium", "category": "crypto", "copiers": 10}
    ],
    "leagues": []
}"#;

//! Built-in demo catalogs used when no catalog file is configured.

use rust_decimal_macros::dec;

use crate::domain::{
    League, LeagueId, LeagueStatus, Market, MarketId, MarketStatus, RiskScore, Trader, TraderId,
};

pub fn markets() -> Vec<Market> {
    use MarketStatus::{ClosingSoon, New, Resolved, Trending};

    [
        (
            "btc-150k-2025",
            "Will Bitcoin reach $150k by end of 2025?",
            Trending,
            "crypto",
            dec!(2450000),
        ),
        (
            "fed-cut-december",
            "Will the Fed cut rates in December?",
            Trending,
            "finance",
            dec!(1875000),
        ),
        (
            "chiefs-super-bowl",
            "Will the Chiefs win the Super Bowl?",
            Trending,
            "sports",
            dec!(980000),
        ),
        (
            "eth-etf-flows",
            "Will ETH ETF inflows exceed $1B this month?",
            New,
            "crypto",
            dec!(125000),
        ),
        (
            "gpt-next-release",
            "Will the next GPT model ship before July?",
            Trending,
            "technology",
            dec!(640000),
        ),
        (
            "senate-control",
            "Which party will control the Senate?",
            ClosingSoon,
            "politics",
            dec!(3200000),
        ),
        ("sol-flip-eth", "Will Solana flip Ethereum by market cap?", New, "crypto", dec!(45000)),
        (
            "world-cup-host",
            "Will the 2030 World Cup final be played in Spain?",
            Trending,
            "sports",
            dec!(210000),
        ),
        (
            "apple-foldable",
            "Will Apple announce a foldable iPhone this year?",
            New,
            "technology",
            dec!(88000),
        ),
        (
            "sp500-ath",
            "Will the S&P 500 close at an all-time high on Friday?",
            ClosingSoon,
            "finance",
            dec!(515000),
        ),
        (
            "uk-election-turnout",
            "Will UK election turnout exceed 65%?",
            Resolved,
            "politics",
            dec!(720000),
        ),
        ("doge-dollar", "Will Dogecoin reach $1?", Trending, "crypto", dec!(305000)),
        ("nba-mvp", "Will the reigning MVP repeat this season?", Trending, "sports", dec!(150000)),
        ("oil-100", "Will Brent crude trade above $100?", Resolved, "finance", dec!(410000)),
    ]
    .into_iter()
    .map(|(id, title, status, category, volume)| {
        Market::new(MarketId::from(id), title, status, category, volume)
    })
    .collect()
}

pub fn traders() -> Vec<Trader> {
    use RiskScore::{High, Low, Medium};

    [
        ("trader-1", 1, "CryptoWhale", dec!(125430.50), Medium, "crypto", 1240),
        ("trader-2", 2, "SportsOracle", dec!(98200.00), Low, "sports", 860),
        ("trader-3", 3, "MacroMaven", dec!(87650.25), Low, "finance", 712),
        ("trader-4", 4, "DegenDave", dec!(76110.00), High, "crypto", 455),
        ("trader-5", 5, "PollWatcher", dec!(64320.75), Medium, "politics", 390),
        ("trader-6", 6, "SiliconSeer", dec!(51980.00), Medium, "technology", 301),
        ("trader-7", 7, "GridironGuru", dec!(43200.40), High, "sports", 248),
        ("trader-8", 8, "BondBaron", dec!(38900.00), Low, "finance", 199),
        ("trader-9", 9, "AltcoinAlice", dec!(27450.10), High, "crypto", 143),
        ("trader-10", 10, "LateNightLarry", dec!(-4120.00), High, "politics", 12),
    ]
    .into_iter()
    .map(|(id, rank, username, pnl, risk, category, copiers)| {
        Trader::new(TraderId::from(id), rank, username, pnl, risk, category, copiers)
    })
    .collect()
}

pub fn leagues() -> Vec<League> {
    vec![
        League::builder(LeagueId::new(1), "Crypto Majors Q4 Showdown")
            .description("Trade the biggest crypto markets this quarter")
            .category("Crypto")
            .entry_fee("100 $PROPHET")
            .prize_pool("15,000 $PROPHET")
            .participants(78)
            .max_participants(100)
            .time_remaining("3 days")
            .status(LeagueStatus::Open)
            .creator("CryptoKing")
            .duration("30 days")
            .markets(["BTC/USD", "ETH/USD", "SOL/USD", "ADA/USD"])
            .build(),
        League::builder(LeagueId::new(2), "2024 F1 Constructors Cup")
            .description("Predict Formula 1 race outcomes and championship results")
            .category("Sports")
            .entry_fee("0.1 ETH")
            .prize_pool("5.2 ETH")
            .participants(45)
            .max_participants(50)
            .time_remaining("1 day")
            .status(LeagueStatus::Open)
            .creator("F1Fanatic")
            .duration("Season Long")
            .markets(["Monaco GP", "British GP", "Italian GP", "Abu Dhabi GP"])
            .build(),
        League::builder(LeagueId::new(3), "Election Night Live")
            .description("Call the swing states before the networks do")
            .category("Politics")
            .entry_fee("50 USDC")
            .prize_pool("4,000 USDC")
            .participants(96)
            .max_participants(120)
            .time_remaining("12 days")
            .status(LeagueStatus::Active)
            .creator("PollWatcher")
            .duration("2 weeks")
            .markets(["Arizona", "Georgia", "Pennsylvania", "Nevada"])
            .build(),
        League::builder(LeagueId::new(4), "Rate Decision Derby")
            .description("Forecast central bank moves across the G7")
            .category("Finance")
            .entry_fee("25 USDC")
            .prize_pool("1,500 USDC")
            .participants(31)
            .max_participants(64)
            .time_remaining("6 days")
            .status(LeagueStatus::Open)
            .creator("MacroMaven")
            .duration("3 months")
            .markets(["FOMC", "ECB", "BoE", "BoJ"])
            .build(),
        League::builder(LeagueId::new(5), "Launch Window Challenge")
            .description("Predict rocket launches and space mission milestones")
            .category("Science")
            .entry_fee("Free")
            .prize_pool("500 $PROPHET")
            .participants(200)
            .max_participants(200)
            .time_remaining("20 days")
            .status(LeagueStatus::Active)
            .creator("OrbitOwl")
            .duration("60 days")
            .markets(["Starship IFT", "Artemis II", "New Glenn"])
            .build(),
        League::builder(LeagueId::new(6), "Summer Hoops Invitational")
            .description("Bracket predictions for the summer basketball league")
            .category("Sports")
            .entry_fee("10 USDC")
            .prize_pool("800 USDC")
            .participants(64)
            .max_participants(64)
            .time_remaining("Ended")
            .status(LeagueStatus::Closed)
            .creator("GridironGuru")
            .duration("6 weeks")
            .markets(["Quarterfinals", "Semifinals", "Final"])
            .build(),
    ]
}

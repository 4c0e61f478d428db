//! Handlers for the `markets`, `traders` and `leagues` commands.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tabled::Tabled;
use tracing::info;

use super::output;
use super::{LeaguesArgs, MarketsArgs, PageArgs, TradersArgs};
use crate::config::Config;
use crate::domain::{DomainError, League, Market, Trader};
use crate::error::{Error, Result};
use crate::filter::predicate::is_wildcard;
use crate::filter::{Criteria, LeagueFilter, MarketFilter, Timeframe, TraderFilter};
use crate::session::BrowseSession;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Market")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

impl From<&Market> for MarketRow {
    fn from(market: &Market) -> Self {
        Self {
            title: market.title().to_string(),
            status: market.status().to_string(),
            category: market.category().to_string(),
            volume: output::usd(market.volume()),
        }
    }
}

#[derive(Tabled)]
struct TraderRow {
    #[tabled(rename = "#")]
    rank: u32,
    #[tabled(rename = "Trader")]
    username: String,
    #[tabled(rename = "P&L")]
    pnl: String,
    #[tabled(rename = "Risk")]
    risk: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Copiers")]
    copiers: u32,
}

impl From<&Trader> for TraderRow {
    fn from(trader: &Trader) -> Self {
        Self {
            rank: trader.rank(),
            username: trader.username().to_string(),
            pnl: output::usd(trader.pnl()),
            risk: trader.risk_score().to_string(),
            category: trader.category().to_string(),
            copiers: trader.copiers(),
        }
    }
}

#[derive(Tabled)]
struct LeagueRow {
    #[tabled(rename = "League")]
    name: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Entry Fee")]
    entry_fee: String,
    #[tabled(rename = "Prize Pool")]
    prize_pool: String,
    #[tabled(rename = "Players")]
    players: String,
    #[tabled(rename = "Time")]
    time_remaining: String,
}

impl From<&League> for LeagueRow {
    fn from(league: &League) -> Self {
        Self {
            name: league.name().to_string(),
            status: league.status().label(),
            category: league.category().to_string(),
            entry_fee: league.entry_fee().to_string(),
            prize_pool: league.prize_pool().to_string(),
            players: format!("{} / {}", league.participants(), league.max_participants()),
            time_remaining: league.time_remaining().to_string(),
        }
    }
}

/// Parse an enum selector where `""`/`"all"` means no restriction.
fn parse_selector<E>(value: &str) -> Result<Option<E>>
where
    E: FromStr<Err = DomainError>,
{
    if is_wildcard(value) {
        return Ok(None);
    }
    Ok(Some(value.parse()?))
}

/// Text selectors normalise their wildcard spellings to the empty string.
fn selector_text(value: &str) -> String {
    if is_wildcard(value) {
        String::new()
    } else {
        value.to_string()
    }
}

fn market_filter(args: &MarketsArgs) -> Result<MarketFilter> {
    if args.min_volume < Decimal::ZERO {
        return Err(Error::InvalidArgument {
            arg: "--min-volume",
            reason: format!("must be non-negative, got {}", args.min_volume),
        });
    }
    Ok(MarketFilter {
        search: args.search.clone(),
        status: parse_selector(&args.status)?,
        category: selector_text(&args.category),
        min_volume: args.min_volume,
    })
}

fn trader_filter(args: &TradersArgs) -> Result<TraderFilter> {
    Ok(TraderFilter {
        search: args.search.clone(),
        category: selector_text(&args.category),
        timeframe: Timeframe::from_str(&args.timeframe)?,
        risk: parse_selector(&args.risk)?,
    })
}

fn league_filter(args: &LeaguesArgs) -> Result<LeagueFilter> {
    Ok(LeagueFilter {
        search: args.search.clone(),
        category: selector_text(&args.category),
        status: parse_selector(&args.status)?,
    })
}

/// Execute `markets`.
pub fn markets(config: &Config, args: &MarketsArgs) -> Result<()> {
    let catalogs = config.catalogs()?;
    // The markets view lands on the trending tab; its "clear filters"
    // action returns there.
    let mut session = BrowseSession::new(
        catalogs.markets.as_slice(),
        MarketFilter::landing(),
        config.window()?,
    );
    session.set_filter(market_filter(args)?);
    render(
        &mut session,
        args.pages,
        &View {
            name: "markets",
            reset: "predictbase markets",
        },
        |market| MarketRow::from(market),
    )
}

/// Execute `traders`.
pub fn traders(config: &Config, args: &TradersArgs) -> Result<()> {
    let catalogs = config.catalogs()?;
    let mut session = BrowseSession::new(
        catalogs.traders.as_slice(),
        TraderFilter::default(),
        config.window()?,
    );
    session.set_filter(trader_filter(args)?);
    render(
        &mut session,
        args.pages,
        &View {
            name: "traders",
            reset: "predictbase traders",
        },
        |trader| TraderRow::from(trader),
    )
}

/// Execute `leagues`.
pub fn leagues(config: &Config, args: &LeaguesArgs) -> Result<()> {
    let catalogs = config.catalogs()?;
    let mut session = BrowseSession::new(
        catalogs.leagues.as_slice(),
        LeagueFilter::default(),
        config.window()?,
    );
    session.set_filter(league_filter(args)?);
    render(
        &mut session,
        args.pages,
        &View {
            name: "leagues",
            reset: "predictbase leagues",
        },
        |league| LeagueRow::from(league),
    )
}

struct View {
    name: &'static str,
    /// Command that shows the view with its default filter.
    reset: &'static str,
}

/// Issue one "load more" per page past the first, stopping once everything
/// is visible.
fn open_pages<T, F>(session: &mut BrowseSession<'_, T, F>, pages: u32)
where
    F: Criteria<T> + Clone,
{
    for _ in 1..pages {
        if !session.has_more() {
            break;
        }
        session.load_more();
    }
}

fn render<T, F, R>(
    session: &mut BrowseSession<'_, T, F>,
    pages: PageArgs,
    view: &View,
    to_row: impl Fn(&T) -> R,
) -> Result<()>
where
    T: Serialize,
    F: Criteria<T> + Clone + PartialEq + Serialize,
    R: Tabled,
{
    open_pages(session, pages.pages);

    let page = session.page();
    info!(
        view = view.name,
        matched = page.total,
        visible = page.items.len(),
        "view rendered"
    );

    if output::is_json() {
        output::emit_json_line(
            view.name,
            json!({
                "filter": session.filter(),
                "total": page.total,
                "visible": page.items.len(),
                "has_more": page.has_more,
                "items": page.items,
            }),
        );
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    if page.is_empty() {
        output::warning(&format!("No {} found matching your criteria", view.name));
        if session.is_filtered() {
            output::hint(&format!(
                "clear filters with {}",
                output::highlight(view.reset)
            ));
        }
        return Ok(());
    }

    println!();
    output::table(page.items.iter().map(|item| to_row(item)));
    output::note(&format!(
        "Showing {} of {} {}",
        page.items.len(),
        page.total,
        view.name
    ));
    if page.has_more {
        output::hint(&format!("load more with --pages {}", pages.pages + 1));
    }

    Ok(())
}

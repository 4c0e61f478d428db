//! Handler for the `config` command group.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Execute `config validate`.
pub fn validate(path: Option<&Path>) -> Result<()> {
    let path = path.ok_or(ConfigError::MissingField { field: "--config" })?;
    let config = Config::load(path)?;
    let catalogs = config.catalogs()?;

    output::success(&format!("{} is valid", path.display()));
    output::field("Markets", catalogs.markets.len());
    output::field("Traders", catalogs.traders.len());
    output::field("Leagues", catalogs.leagues.len());
    Ok(())
}

/// Execute `config show`.
pub fn show(config: &Config, path: Option<&Path>) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Effective Configuration");
    output::field(
        "Source",
        path.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string()),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Pagination");
    output::field("Page size", config.pagination.page_size);
    output::field("Page increment", config.pagination.page_increment);

    output::section("Catalog");
    match &config.catalog.path {
        Some(catalog) => output::field("Path", catalog.display()),
        None => output::field("Path", "(built-in seed data)"),
    }
    Ok(())
}

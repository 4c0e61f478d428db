//! Application configuration loading and validation.
//!
//! Configuration is read from a TOML file. Every section is optional; a
//! missing section takes its defaults, so an empty file is a valid config.
//!
//! # Example
//!
//! ```no_run
//! use predictbase::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("predictbase.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

pub mod logging;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSet;
use crate::error::{ConfigError, Result};
use crate::pagination::{PaginationWindow, DEFAULT_PAGE_INCREMENT, DEFAULT_PAGE_SIZE};

pub use logging::LoggingConfig;

/// Pagination sizes shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub page_increment: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_increment: DEFAULT_PAGE_INCREMENT,
        }
    }
}

/// Where catalog records come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in seed catalogs are used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub pagination: PaginationConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    ///
    /// A relative catalog path is resolved against the config file's
    /// directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse(&content)?;

        if let (Some(catalog), Some(dir)) = (config.catalog.path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "'{}' is not one of {}",
                    self.logging.format,
                    LoggingConfig::FORMATS.join(", ")
                ),
            }
            .into());
        }
        if self.pagination.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.pagination.page_increment == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_increment",
                reason: "must be positive".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize tracing from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// The pagination window every view starts with.
    pub fn window(&self) -> Result<PaginationWindow> {
        Ok(PaginationWindow::try_new(
            self.pagination.page_size,
            self.pagination.page_increment,
        )?)
    }

    /// Load the configured catalog file, or the seed catalogs.
    pub fn catalogs(&self) -> Result<CatalogSet> {
        match &self.catalog.path {
            Some(path) => CatalogSet::load(path),
            None => Ok(CatalogSet::seeded()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.window().unwrap(), PaginationWindow::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config = Config::parse("[pagination]\npage_size = 12\n").unwrap();
        assert_eq!(config.pagination.page_size, 12);
        assert_eq!(config.pagination.page_increment, DEFAULT_PAGE_INCREMENT);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn rejects_zero_page_size() {
        let result = Config::parse("[pagination]\npage_size = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "page_size",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse("[logging]\nlevel = \"info\"\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "format",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_blank_log_level() {
        let result = Config::parse("[logging]\nlevel = \"  \"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "level" }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse("[pagination\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}

//! # Configuration
//!
//! Application settings layered from defaults, an optional TOML file and
//! `WEBSITE_QUOTE__*` environment variables.
//!
//! ```toml
//! [pricing]
//! seo = 300
//! ads = 400
//! web_base = 500
//! customization_rate = 30
//!
//! [validation]
//! name_min_length = 2
//! name_max_length = 100
//!
//! [log]
//! level = "info"
//! json = false
//! ```
//!
//! Environment variables use `__` between sections, e.g.
//! `WEBSITE_QUOTE__PRICING__SEO=350`.

use crate::application::form::validation::ValidationConfig;
use crate::domain::services::pricing::PriceList;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "WEBSITE_QUOTE";

/// Default log filter.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Service rates.
    pub pricing: PriceList,
    /// Validator limits.
    pub validation: ValidationConfig,
    /// Logging.
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads settings.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// `path`, when given, must point to an existing TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value has the wrong
    /// type.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }
        builder = builder.add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = builder.build().context("failed to read configuration")?;
        settings
            .try_deserialize()
            .context("invalid configuration values")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Price;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_built_in_rates() {
        let config = AppConfig::default();
        assert_eq!(config.pricing.seo, Price::from_units(300));
        assert_eq!(config.pricing.customization_rate, Price::from_units(30));
        assert_eq!(config.validation.name_min_length, 2);
        assert_eq!(config.validation.name_max_length, 100);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.pricing, PriceList::default());
    }

    #[test]
    fn file_overrides_selected_values() {
        let file = write_toml(
            r#"
[pricing]
seo = 350

[validation]
name_max_length = 60

[log]
json = true
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.pricing.seo, Price::from_units(350));
        assert_eq!(config.pricing.ads, Price::from_units(400));
        assert_eq!(config.validation.name_max_length, 60);
        assert_eq!(config.validation.name_min_length, 2);
        assert!(config.log.json);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/website-quote.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let file = write_toml("[pricing]\nads = -1\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}

//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Airtable record store configuration.
    pub airtable: AirtableConfig,
    /// Dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Social contribution rates.
    #[serde(default)]
    pub cotisation: CotisationConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Airtable configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AirtableConfig {
    /// Personal access token.
    pub api_key: String,
    /// Base identifier (`appXXXXXXXXXXXXXX`).
    pub base_id: String,
    /// Table holding the transactions.
    #[serde(default = "default_table")]
    pub table: String,
    /// REST API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Web view URL used to build per-record links.
    #[serde(default)]
    pub view_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_table() -> String {
    "Transactions".to_string()
}

fn default_base_url() -> String {
    "https://api.airtable.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// First year offered by the year selector.
    #[serde(default = "default_start_year")]
    pub start_year: i32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
        }
    }
}

fn default_start_year() -> i32 {
    2018
}

/// Social contribution rates, as fractions of declarable revenue.
///
/// The two tiers are rounded separately, so they are kept apart here.
#[derive(Debug, Clone, Deserialize)]
pub struct CotisationConfig {
    /// Main contribution rate (21.2%).
    #[serde(default = "default_main_rate")]
    pub main_rate: Decimal,
    /// Secondary contribution rate (0.2%).
    #[serde(default = "default_secondary_rate")]
    pub secondary_rate: Decimal,
}

impl Default for CotisationConfig {
    fn default() -> Self {
        Self {
            main_rate: default_main_rate(),
            secondary_rate: default_secondary_rate(),
        }
    }
}

fn default_main_rate() -> Decimal {
    Decimal::new(212, 3)
}

fn default_secondary_rate() -> Decimal {
    Decimal::new(2, 3)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COMPTA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

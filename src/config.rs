//! Application configuration management.
//!
//! Configuration is read once from environment variables at startup using the `envy` crate,
//! then handed to the router as an immutable value. Every setting has a fallback.

use serde::Deserialize;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human-readable text
    Text,
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `LOG_LEVEL` (optional): tracing filter directive, defaults to `info`
/// - `LOG_FORMAT` (optional): `json` or `text`, defaults to `json`
/// - `SERVER_PORT` or `DYNAMO_PORT` (optional): HTTP server port, defaults to 3000
/// - `API_KEY` (optional): shared secret expected in the `X-API-Key` header
/// - `TABLE_NAME` (optional): DynamoDB table for text records, defaults to `NLPText`
/// - `DYNAMO_ENDPOINT` (optional): endpoint override, e.g. a DynamoDB Local URL
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    #[serde(default, rename = "server_port")]
    port: Option<u16>,

    #[serde(default)]
    dynamo_port: Option<String>,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_table_name")]
    pub table_name: String,

    #[serde(default)]
    pub dynamo_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default port if neither SERVER_PORT nor DYNAMO_PORT is set.
fn default_port() -> u16 {
    3000
}

fn default_table_name() -> String {
    "NLPText".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present. Field names map to upper-case
    /// variables: `table_name` -> `TABLE_NAME`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed into its expected type
    /// (e.g. a non-numeric port).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)?;

        if let Some(raw) = config.fallback_port_var() {
            raw.parse::<u16>().map_err(|e| {
                envy::Error::Custom(format!("{} while parsing DYNAMO_PORT={:?}", e, raw))
            })?;
        }

        Ok(config)
    }

    /// Listening port: `SERVER_PORT`, then a non-empty `DYNAMO_PORT`, then 3000.
    pub fn server_port(&self) -> u16 {
        self.port
            .or_else(|| self.fallback_port_var().and_then(|raw| raw.parse().ok()))
            .unwrap_or_else(default_port)
    }

    /// `DYNAMO_PORT`, when it is set to something other than an empty string.
    fn fallback_port_var(&self) -> Option<&str> {
        self.dynamo_port.as_deref().filter(|raw| !raw.is_empty())
    }
}

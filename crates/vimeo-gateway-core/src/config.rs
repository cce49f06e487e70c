//! Configuration module
//!
//! Settings are read from the process environment (after loading an optional
//! `.env` file). Only the Vimeo access token is mandatory.

use std::env;
use std::fmt;

pub const DEFAULT_VIMEO_BASE_URL: &str = "https://api.vimeo.com";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const VIMEO_TIMEOUT_SECS: u64 = 30;
const VIMEO_UPLOAD_TIMEOUT_SECS: u64 = 120;
const MAX_UPLOAD_SIZE_MB: usize = 500;
const HTTP_CONCURRENCY_LIMIT: usize = 1024;

/// Output format of the console log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    pub vimeo_access_token: String,
    pub vimeo_base_url: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Timeout for metadata calls (list, search, get, ticket creation)
    pub vimeo_timeout_secs: u64,
    /// Timeout for the binary transfer of an upload
    pub vimeo_upload_timeout_secs: u64,
    pub max_upload_size_bytes: usize,
    /// Upper bound on requests handled at once
    pub http_concurrency_limit: usize,
}

// The access token must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("vimeo_access_token", &"<redacted>")
            .field("vimeo_base_url", &self.vimeo_base_url)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("cors_origins", &self.cors_origins)
            .field("vimeo_timeout_secs", &self.vimeo_timeout_secs)
            .field("vimeo_upload_timeout_secs", &self.vimeo_upload_timeout_secs)
            .field("max_upload_size_bytes", &self.max_upload_size_bytes)
            .field("http_concurrency_limit", &self.http_concurrency_limit)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(get: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vimeo_access_token = get("VIMEO_ACCESS_TOKEN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("VIMEO_ACCESS_TOKEN must be set"))?;

        let vimeo_base_url = get("VIMEO_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_VIMEO_BASE_URL.to_string());

        let log_format = match get("LOG_FORMAT")
            .unwrap_or_else(|| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "compact" => LogFormat::Compact,
            "json" => LogFormat::Json,
            other => {
                return Err(anyhow::anyhow!(
                    "LOG_FORMAT must be 'compact' or 'json', got '{}'",
                    other
                ))
            }
        };

        let environment = get("ENVIRONMENT")
            .or_else(|| get("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size_mb = get("MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        Ok(Config {
            vimeo_access_token,
            vimeo_base_url,
            log_level: get("LOG_LEVEL")
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: match get("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
                None => DEFAULT_PORT,
            },
            environment,
            cors_origins,
            vimeo_timeout_secs: get("VIMEO_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(VIMEO_TIMEOUT_SECS),
            vimeo_upload_timeout_secs: get("VIMEO_UPLOAD_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(VIMEO_UPLOAD_TIMEOUT_SECS),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            http_concurrency_limit: get("HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(self.vimeo_base_url.starts_with("https://")
            || self.vimeo_base_url.starts_with("http://"))
        {
            return Err(anyhow::anyhow!(
                "VIMEO_BASE_URL must be an http(s) URL, got '{}'",
                self.vimeo_base_url
            ));
        }

        if self.vimeo_timeout_secs == 0 || self.vimeo_upload_timeout_secs == 0 {
            return Err(anyhow::anyhow!("Vimeo timeouts must be greater than 0"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }
}

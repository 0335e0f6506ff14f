//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Variables may also come from a `.env` file (loaded via `dotenvy` in `main.rs`),
//! and the listen address and log format can be overridden on the command line.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export LOG_FORMAT="json"
//! export ENABLE_ADMIN_ROUTES="true"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RATE_LIMIT_PER_SECOND` - Sustained API requests per second per client IP (default: 10, max: 1000)
//! - `RATE_LIMIT_BURST` - API burst size per client IP (default: 100)
//! - `ENABLE_ADMIN_ROUTES` - Mount `DELETE /api/v1/decks` (default: `false`)
//! - `SHUFFLE_SEED` - Fixed seed for reproducible shuffles (default: seeded from the OS)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    /// When true, the registry can be wiped through `DELETE /api/v1/decks`.
    /// There is no authentication, so enable only on trusted deployments.
    pub enable_admin_routes: bool,
    /// Seed for the shuffle RNG. `None` seeds from the operating system.
    pub shuffle_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            rate_limit_per_second: 10,
            rate_limit_burst: 100,
            enable_admin_routes: false,
            shuffle_seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHUFFLE_SEED` is set but is not a valid `u64`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_per_second);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_burst);

        let enable_admin_routes = env::var("ENABLE_ADMIN_ROUTES")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let shuffle_seed = env::var("SHUFFLE_SEED")
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .with_context(|| format!("SHUFFLE_SEED must be an unsigned integer, got '{v}'"))
            })
            .transpose()?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            rate_limit_per_second,
            rate_limit_burst,
            enable_admin_routes,
            shuffle_seed,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - rate limits are zero or `rate_limit_per_second` exceeds 1000
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_per_second == 0 || self.rate_limit_per_second > 1000 {
            anyhow::bail!(
                "RATE_LIMIT_PER_SECOND must be between 1 and 1000, got {}",
                self.rate_limit_per_second
            );
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limit: {}/s (burst {})",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
        tracing::info!(
            "  Admin routes: {}",
            if self.enable_admin_routes { "enabled" } else { "disabled" }
        );
        match self.shuffle_seed {
            Some(seed) => tracing::info!("  Shuffle seed: {} (reproducible)", seed),
            None => tracing::info!("  Shuffle seed: OS entropy"),
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

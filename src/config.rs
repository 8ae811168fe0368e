//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded in `main.rs`).
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CORS_ALLOW_ORIGIN` - `*` or a single `http(s)://` origin (default: `*`)
//! - `ADMIN_EMAIL` - E-mail that logs in as administrator (default: `admin@cinevision.com`)
//! - `ADMIN_PASSWORD` - Password for that e-mail (default: `admin123`)
//! - `FIXTURES_PATH` - JSON fixture document replacing the embedded one
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export CORS_ALLOW_ORIGIN="http://localhost:3000"
//! export FIXTURES_PATH="./fixtures/catalog.json"
//! ```

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::domain::entities::AdminCredentials;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@cinevision.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Value of `Access-Control-Allow-Origin`.
    pub cors_allow_origin: String,
    pub admin_email: String,
    /// Never logged; see [`Config::print_summary`].
    pub admin_password: String,
    /// When unset, the fixture document compiled into the binary is served.
    pub fixtures_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cors_allow_origin: "*".to_string(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            fixtures_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Currently infallible; validation happens in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let cors_allow_origin =
            env::var("CORS_ALLOW_ORIGIN").unwrap_or(defaults.cors_allow_origin);
        let admin_email = env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email);
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password);

        let fixtures_path = env::var("FIXTURES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            cors_allow_origin,
            admin_email,
            admin_password,
            fixtures_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port` with a numeric port
    /// - `cors_allow_origin` is neither `*` nor an `http(s)://` origin
    /// - `admin_email` or `admin_password` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let port_ok = self
            .listen_addr
            .rsplit_once(':')
            .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
        if !port_ok {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let origin = self.cors_allow_origin.as_str();
        if origin != "*" {
            let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");
            if !scheme_ok || origin.ends_with('/') || origin.contains(char::is_whitespace) {
                anyhow::bail!(
                    "CORS_ALLOW_ORIGIN must be '*' or an origin like 'http://localhost:3000', got '{}'",
                    origin
                );
            }
        }

        if self.admin_email.trim().is_empty() {
            anyhow::bail!("ADMIN_EMAIL must not be empty");
        }

        if self.admin_password.is_empty() {
            anyhow::bail!("ADMIN_PASSWORD must not be empty");
        }

        Ok(())
    }

    /// Credentials that log in with the `ADMIN` role.
    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials::new(self.admin_email.clone(), self.admin_password.clone())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  CORS allow origin: {}", self.cors_allow_origin);
        tracing::info!(
            "  Admin login: {} / {}",
            self.admin_email,
            mask_secret(&self.admin_password)
        );

        match &self.fixtures_path {
            Some(path) => tracing::info!("  Fixtures: {}", path.display()),
            None => tracing::info!("  Fixtures: embedded"),
        }
    }
}

/// Hides a secret for logging, keeping only its length visible.
fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count().min(8))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
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

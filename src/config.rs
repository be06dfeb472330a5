//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! The lookup table itself has no configuration: it starts empty on every
//! process start.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base URL for short links, e.g. `https://s.example.com`
//!   (default: derived from each request's `Host` header)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL short links point back to. When `None`, the base is
    /// built from the request's `Host` header.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults; values are checked by
    /// [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url = Self::load_base_url();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
        })
    }

    /// Loads the public base URL.
    ///
    /// An empty `BASE_URL` is treated as unset. A trailing slash is dropped so
    /// that short links never contain `//`.
    fn load_base_url() -> Option<String> {
        let url = env::var("BASE_URL").ok()?;
        let trimmed = url.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a `host:port` socket address
    /// - `base_url` is not an absolute HTTP(S) URL without query or fragment
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate base URL format (if present)
        if let Some(ref base_url) = self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                anyhow::bail!(
                    "BASE_URL must start with 'http://' or 'https://', got '{}'",
                    base_url
                );
            }

            let parsed = url::Url::parse(base_url)
                .map_err(|e| anyhow::anyhow!("BASE_URL is not a valid URL: {}", e))?;

            if parsed.query().is_some() || parsed.fragment().is_some() {
                anyhow::bail!(
                    "BASE_URL must not contain a query or fragment, got '{}'",
                    base_url
                );
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match &self.base_url {
            Some(base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from Host header"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_validation() {
        let mut config = valid_config();

        config.base_url = Some("https://s.example.com".to_string());
        assert!(config.validate().is_ok());

        config.base_url = Some("http://localhost:3000/links".to_string());
        assert!(config.validate().is_ok());

        config.base_url = Some("s.example.com".to_string());
        assert!(config.validate().is_err());

        config.base_url = Some("ftp://s.example.com".to_string());
        assert!(config.validate().is_err());

        config.base_url = Some("https://s.example.com/?x=1".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_base_url_trims_trailing_slash() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BASE_URL", "https://s.example.com/");
        }

        assert_eq!(
            Config::load_base_url().as_deref(),
            Some("https://s.example.com")
        );

        // Cleanup
        unsafe {
            env::remove_var("BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_empty_base_url_is_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BASE_URL", "  ");
        }

        assert!(Config::load_base_url().is_none());

        // Cleanup
        unsafe {
            env::remove_var("BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert!(config.base_url.is_none());
        assert_eq!(config.log_format, "text");
        assert!(config.validate().is_ok());
    }
}

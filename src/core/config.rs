//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths come from `[package.metadata.leptos]` instead.

/// Inbox shown on the site when `CONTACT_EMAIL` is not set
pub const DEFAULT_CONTACT_EMAIL: &str = super::catalog::STUDIO_EMAIL;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public base URL the site is reachable at
    /// Example: https://framehouse.studio
    pub public_url: Option<String>,

    /// Inbox that receives leads
    pub contact_email: Option<String>,

    /// Tracing filter directive (`RUST_LOG`)
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            public_url: std::env::var("PUBLIC_URL").ok(),
            contact_email: std::env::var("CONTACT_EMAIL").ok(),
            log_filter: std::env::var("RUST_LOG").ok(),
        }
    }

    /// Contact inbox, falling back to the studio default
    pub fn contact_email(&self) -> &str {
        self.contact_email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
            .unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    /// Tracing filter directive, falling back to `info`
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Config {
        Config {
            public_url: None,
            contact_email: None,
            log_filter: None,
        }
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            public_url: Some("https://framehouse.studio".to_string()),
            contact_email: Some("hello@framehouse.studio".to_string()),
            log_filter: Some("framehouse=debug".to_string()),
        };

        assert_eq!(config.public_url.as_deref(), Some("https://framehouse.studio"));
        assert_eq!(config.contact_email(), "hello@framehouse.studio");
        assert_eq!(config.log_filter(), "framehouse=debug");
    }

    #[test]
    fn test_config_defaults() {
        let config = empty();

        assert!(config.public_url.is_none());
        assert_eq!(config.contact_email(), DEFAULT_CONTACT_EMAIL);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_blank_contact_email_falls_back() {
        let config = Config {
            contact_email: Some("  ".to_string()),
            ..empty()
        };

        assert_eq!(config.contact_email(), DEFAULT_CONTACT_EMAIL);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        assert!(!config.log_filter().is_empty());
        assert!(!config.contact_email().is_empty());
    }
}

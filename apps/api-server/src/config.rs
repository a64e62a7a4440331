//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use papyr_core::DomainError;
use papyr_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Run pending migrations before serving.
    pub auto_migrate: bool,
    pub site: SiteSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            database: DatabaseConfig {
                url,
                max_connections: parse_var("DB_MAX_CONNECTIONS", 100),
                min_connections: parse_var("DB_MIN_CONNECTIONS", 10),
                sql_logging: flag_var("DB_SQL_LOGGING", false),
            },
            auto_migrate: flag_var("AUTO_MIGRATE", true),
            site: SiteSettings::from_env(),
        })
    }
}

/// Sections of the site that can be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Blog,
    Events,
    Store,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Blog => "blog",
            Section::Events => "events",
            Section::Store => "store",
        }
    }
}

/// Site-wide toggles for the optional sections.
#[derive(Debug, Clone, Copy)]
pub struct SiteSettings {
    pub enable_blog: bool,
    pub enable_events: bool,
    pub enable_store: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            enable_blog: true,
            enable_events: true,
            enable_store: true,
        }
    }
}

impl SiteSettings {
    pub fn from_env() -> Self {
        Self {
            enable_blog: flag_var("ENABLE_BLOG", true),
            enable_events: flag_var("ENABLE_EVENTS", true),
            enable_store: flag_var("ENABLE_STORE", true),
        }
    }

    /// Fails with [`DomainError::Disabled`] when `section` is switched off.
    pub fn ensure(&self, section: Section) -> Result<(), DomainError> {
        let enabled = match section {
            Section::Blog => self.enable_blog,
            Section::Events => self.enable_events,
            Section::Store => self.enable_store,
        };

        if enabled {
            Ok(())
        } else {
            Err(DomainError::Disabled(section.as_str()))
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn flag_var(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

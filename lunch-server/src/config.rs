//! Server configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DATABASE_URL | unset | `postgres://...` selects PostgreSQL, `sqlite:...` a custom SQLite URL |
//! | SQLITE_PATH | lunch_app.db | SQLite file used when DATABASE_URL is unset |
//! | PORT | 8080 | HTTP port |
//! | ALLOWED_ORIGINS | production frontend + localhost:3000 | comma-separated CORS allow-list |
//! | DISPLAY_TIMEZONE | Asia/Seoul | timezone visits are normalized to and displayed in |
//! | SEED_SAMPLE_DATA | true | insert sample restaurants into an empty store |
//! | ENVIRONMENT | development | development / staging / production |

use chrono_tz::Tz;

use crate::BoxError;

const DEFAULT_SQLITE_PATH: &str = "lunch_app.db";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ALLOWED_ORIGINS: &str = "https://lunch-app-spd2.onrender.com,http://localhost:3000";
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Seoul;

/// Where the relational store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Embedded file-backed (or in-memory) SQLite
    Sqlite { url: String },
    /// Networked PostgreSQL
    Postgres { url: String },
}

impl DatabaseTarget {
    /// SQLite database file, created if missing
    pub fn sqlite_file(path: &str) -> Self {
        Self::Sqlite {
            url: format!("sqlite://{path}?mode=rwc"),
        }
    }

    /// Private in-memory SQLite database
    pub fn sqlite_memory() -> Self {
        Self::Sqlite {
            url: "sqlite::memory:".into(),
        }
    }

    /// Classify a `DATABASE_URL` value by scheme
    pub fn from_url(url: &str) -> Result<Self, BoxError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Self::Postgres { url: url.into() })
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite { url: url.into() })
        } else {
            Err(format!("Unsupported DATABASE_URL scheme: {url}").into())
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Sqlite { url } | Self::Postgres { url } => url,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Sqlite { .. } => "sqlite",
            Self::Postgres { .. } => "postgres",
        }
    }

    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Sqlite { url } if url.contains(":memory:") || url.contains("mode=memory"))
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend
    pub database: DatabaseTarget,
    /// HTTP port
    pub http_port: u16,
    /// Origins allowed for cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Canonical timezone for visit dates
    pub timezone: Tz,
    /// Insert sample restaurants into an empty store at startup
    pub seed_sample_data: bool,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database = match var("DATABASE_URL") {
            Some(url) => DatabaseTarget::from_url(url.trim())?,
            None => DatabaseTarget::sqlite_file(
                &var("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.into()),
            ),
        };

        let http_port = match var("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|e| format!("Invalid PORT '{p}': {e}"))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = parse_origins(
            &var("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.into()),
        )?;

        let timezone = match var("DISPLAY_TIMEZONE") {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|e| format!("Invalid DISPLAY_TIMEZONE '{name}': {e}"))?,
            None => DEFAULT_TIMEZONE,
        };

        let seed_sample_data = match var("SEED_SAMPLE_DATA") {
            Some(v) => parse_bool(&v).ok_or_else(|| format!("Invalid SEED_SAMPLE_DATA '{v}'"))?,
            None => true,
        };

        Ok(Self {
            database,
            http_port,
            allowed_origins,
            timezone,
            seed_sample_data,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    /// Configuration for a given SQLite target with defaults elsewhere and no seeding
    pub fn with_database(database: DatabaseTarget) -> Self {
        Self {
            database,
            http_port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .split(',')
                .map(String::from)
                .collect(),
            timezone: DEFAULT_TIMEZONE,
            seed_sample_data: false,
            environment: "development".into(),
        }
    }
}

/// Comma-separated origin list. A `*` entry is rejected: credentials are
/// allowed, and CORS forbids a wildcard origin alongside them.
fn parse_origins(raw: &str) -> Result<Vec<String>, BoxError> {
    let mut origins = Vec::new();
    for origin in raw.split(',').map(|o| o.trim().trim_end_matches('/')) {
        if origin.is_empty() {
            continue;
        }
        if origin == "*" {
            return Err("Invalid ALLOWED_ORIGINS: '*' cannot be combined with credentials".into());
        }
        origins.push(origin.to_string());
    }
    Ok(origins)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

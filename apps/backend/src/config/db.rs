use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Which store backs the content tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// PostgreSQL server (production)
    Postgres,
    /// SQLite database file, created on first connect
    SqliteFile,
    /// Private in-memory SQLite database (tests, demos)
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite-file" | "sqlite" => Ok(Self::SqliteFile),
            "sqlite-memory" | "memory" => Ok(Self::SqliteMemory),
            other => Err(AppError::config(format!(
                "TRIVIA_DB_KIND must be one of postgres, sqlite-file, sqlite-memory; got '{other}'"
            ))),
        }
    }
}

/// Connection target plus pool sizing.
///
/// Built once by the binary (`from_env`) and handed to
/// `StateBuilder::with_db`; library code never reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub kind: DbKind,
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// In-memory SQLite, as used by the test suites.
    pub fn sqlite_memory() -> Self {
        Self {
            kind: DbKind::SqliteMemory,
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    pub fn sqlite_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            kind: DbKind::SqliteFile,
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    pub fn postgres(
        host: &str,
        port: u16,
        database: &str,
        user: &str,
        password: &str,
    ) -> Self {
        Self {
            kind: DbKind::Postgres,
            url: format!("postgresql://{user}:{password}@{host}:{port}/{database}"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Builds the config from `TRIVIA_DB_KIND` and the per-kind variables.
    pub fn from_env() -> Result<Self, AppError> {
        let kind = match env::var("TRIVIA_DB_KIND") {
            Ok(raw) => raw.parse()?,
            Err(_) => DbKind::Postgres,
        };

        let mut config = match kind {
            DbKind::Postgres => {
                let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
                let port = parse_var("POSTGRES_PORT", 5432u16)?;
                let database = must_var("TRIVIA_DB")?;
                let user = must_var("APP_DB_USER")?;
                let password = must_var("APP_DB_PASSWORD")?;
                Self::postgres(&host, port, &database, &user, &password)
            }
            DbKind::SqliteFile => Self::sqlite_file(must_var("SQLITE_DB_PATH")?),
            DbKind::SqliteMemory => return Ok(Self::sqlite_memory()),
        };

        config.max_connections = parse_var("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        config.acquire_timeout = Duration::from_secs(parse_var(
            "DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?);
        if config.max_connections == 0 {
            return Err(AppError::config("DB_MAX_CONNECTIONS must be at least 1"));
        }
        Ok(config)
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Parse an optional environment variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Environment variable '{name}' is invalid: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

use std::str::FromStr;

use migration::{migrate, MigrationCommand};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::{self, ConnectOptions as _};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector,
};
use tracing::info;

use crate::config::db::{DbConfig, DbKind};
use crate::error::AppError;

/// Open a pooled connection for `config`. Does NOT run migrations.
pub async fn connect_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    if config.kind == DbKind::SqliteMemory {
        return connect_sqlite_memory(config).await;
    }

    let (min, max) = (1, config.max_connections.max(1));
    let mut opt = ConnectOptions::new(config.url.as_str());
    opt.min_connections(min)
        .max_connections(max)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    info!(
        kind = ?config.kind,
        min,
        max,
        acquire_timeout_ms = config.acquire_timeout.as_millis() as u64,
        "pool=connecting"
    );

    let conn = Database::connect(opt).await?;
    Ok(conn)
}

/// In-memory SQLite gives every pooled connection its own database, so the
/// pool holds exactly one connection that is never recycled.
async fn connect_sqlite_memory(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let sqlx_err = |e: sqlx::Error| AppError::from(DbErr::Conn(RuntimeErr::SqlxError(e)));

    let connect = SqliteConnectOptions::from_str(&config.url)
        .map_err(sqlx_err)?
        .disable_statement_logging();

    info!(
        kind = ?config.kind,
        max = 1,
        recycle = false,
        acquire_timeout_ms = config.acquire_timeout.as_millis() as u64,
        "pool=connecting"
    );

    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .acquire_timeout(config.acquire_timeout)
        .max_lifetime(None)
        .idle_timeout(None)
        .connect_with(connect)
        .await
        .map_err(sqlx_err)?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(config).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}

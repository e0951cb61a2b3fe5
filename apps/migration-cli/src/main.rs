use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use tracing::{error, info};
use trivia_backend::config::db::{DbConfig, DbKind};
use trivia_backend::connect_db;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

/// Apply or inspect schema migrations.
///
/// The target store comes from the same variables the backend reads
/// (`TRIVIA_DB_KIND`, `POSTGRES_*`, `TRIVIA_DB`, `APP_DB_*`, `SQLITE_DB_PATH`).
#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Trivia database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    // Each invocation would get its own empty database.
    if config.kind == DbKind::SqliteMemory {
        error!("in-memory SQLite cannot be migrated from the CLI; use postgres or sqlite-file");
        std::process::exit(2);
    }

    let db = match connect_db(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "could not connect to database");
            std::process::exit(1);
        }
    };

    let command = MigrationCommand::from(args.command);
    if let Err(e) = migrate(&db, command).await {
        error!(error = %e, command = ?command, "migration failed");
        std::process::exit(1);
    }
    info!(command = ?command, "migration finished");
}

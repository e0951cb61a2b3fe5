//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos call `map_db_err` so that
//! services and handlers only ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::web::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

fn is_fk_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23503")
        || msg.contains("violates foreign key constraint")
        || msg.contains("FOREIGN KEY constraint failed")
}

fn is_check_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23514")
        || msg.contains("violates check constraint")
        || msg.contains("CHECK constraint failed")
}

/// Serialization failure, deadlock, or a busy/locked SQLite file.
fn is_transient(msg: &str) -> bool {
    mentions_sqlstate(msg, "40001")
        || mentions_sqlstate(msg, "40P01")
        || msg.contains("could not serialize access")
        || msg.contains("deadlock detected")
        || msg.contains("database is locked")
        || msg.contains("database table is locked")
        || msg.contains("SQLITE_BUSY")
}

/// Map a unique violation to the conflict it represents in this domain.
fn unique_conflict(msg: &str) -> (ConflictKind, &'static str) {
    // PostgreSQL reports the index name, SQLite reports table.column
    if msg.contains("ux_categories_title") || msg.contains("categories.title") {
        return (ConflictKind::UniqueTitle, "Category title already exists");
    }
    if msg.contains("game_definition_clues") {
        return (
            ConflictKind::Other("DuplicateLink".into()),
            "Clue already linked to this game definition",
        );
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
///
/// The raw driver message is logged through `Redacted`; it never reaches
/// the client.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Timed out acquiring a pooled connection");
            return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        let (kind, detail) = unique_conflict(&error_msg);
        return DomainError::conflict(kind, detail);
    }

    if is_fk_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::conflict(
            ConflictKind::ForeignKey,
            "Referenced record is missing or still in use",
        );
    }

    if is_check_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::data_integrity("Check constraint violation");
    }

    if is_transient(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Transient transaction conflict");
        return DomainError::conflict(
            ConflictKind::Transient,
            "Concurrent update conflict; retry the request",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

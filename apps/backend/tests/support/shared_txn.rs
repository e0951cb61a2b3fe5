use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use trivia_backend::db::txn::SharedTxn;

/// Begin a database transaction and wrap it as a SharedTxn.
///
/// Tests own the transaction lifecycle; `with_txn` never finishes it.
pub async fn open(conn: &DatabaseConnection) -> SharedTxn {
    let txn = conn.begin().await.expect("Failed to begin transaction");
    SharedTxn(Arc::new(txn))
}

/// Rollback a shared transaction once every clone has been dropped.
pub async fn rollback(shared: SharedTxn) -> Result<(), sea_orm::DbErr> {
    let txn = Arc::try_unwrap(shared.0).map_err(|_| {
        sea_orm::DbErr::Custom("Cannot rollback: transaction is still shared".to_string())
    })?;
    txn.rollback().await
}

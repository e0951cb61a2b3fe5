use sea_orm::{EntityTrait, PaginatorTrait};
use trivia_backend::adapters::categories_sea::{self, CategoryCreate};
use trivia_backend::db::require_db;
use trivia_backend::db::txn::with_txn;
use trivia_backend::db::txn_policy::{current, TxnPolicy};
use trivia_backend::entities::categories;
use trivia_backend::AppError;

use crate::support::test_state::build_test_state;

#[test]
fn default_policy_is_commit_on_ok() {
    assert_eq!(current(), TxnPolicy::CommitOnOk);
}

#[tokio::test]
async fn ok_result_is_committed() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            categories_sea::create_category(txn, CategoryCreate::new("Opera")).await?;
            Ok(())
        })
    })
    .await?;

    let db = require_db(&state)?;
    assert_eq!(categories::Entity::find().count(db).await?, 1);
    Ok(())
}

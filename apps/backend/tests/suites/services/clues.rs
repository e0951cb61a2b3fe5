use sea_orm::TransactionTrait;
use trivia_backend::adapters::clues_sea::ClueCreate;
use trivia_backend::db::require_db;
use trivia_backend::domain::pagination::Page;
use trivia_backend::errors::domain::{DomainError, NotFoundKind};
use trivia_backend::services::ClueService;
use trivia_backend::AppError;

use crate::support::factory::{seed_category, seed_clue, seed_eligible_clues, seed_ineligible_clues};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn list_counts_every_clue_for_page_count() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let category = seed_category(&txn, "Rivers").await;
    seed_eligible_clues(&txn, &category.id, 3).await;
    seed_ineligible_clues(&txn, &category.id).await;

    let page = ClueService::new().list(&txn, Page::new(0)?).await?;
    assert_eq!(page.page_count, 1);
    assert_eq!(page.clues.len(), 4, "invalidated clue is hidden");
    assert!(page.clues.iter().all(|c| c.invalid_count == 0));
    assert!(page.clues.iter().all(|c| c.category.id == category.id));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn invalidate_increments_and_hides_clue() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let service = ClueService::new();

    let category = seed_category(&txn, "Rivers").await;
    let clue = seed_eligible_clues(&txn, &category.id, 1).await.remove(0);

    let first = service.get(&txn, &clue.id).await?;
    assert_eq!(first.invalid_count, 0);
    assert_eq!(first.category.title, category.title);

    let updated = service.invalidate(&txn, &clue.id).await?;
    assert_eq!(updated.id, clue.id);
    assert_eq!(updated.invalid_count, 1);
    let again = service.invalidate(&txn, &clue.id).await?;
    assert_eq!(again.invalid_count, 2);

    let err = service.get(&txn, &clue.id).await.expect_err("hidden");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Clue, _)));

    let err = service
        .invalidate(&txn, "01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .await
        .expect_err("missing");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Clue, _)));

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn random_honors_validity_flag() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;
    let service = ClueService::new();

    let err = service.random(&txn, true).await.expect_err("empty store");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Clue, _)));

    let category = seed_category(&txn, "Rivers").await;
    let disputed = seed_clue(
        &txn,
        ClueCreate::new(&category.id, "Disputed", "What is a delta?", 800).with_invalid_count(4),
    )
    .await;

    assert!(service.random(&txn, true).await.is_err());
    let any = service.random(&txn, false).await?;
    assert_eq!(any.id, disputed.id);
    assert_eq!(any.invalid_count, 4);

    txn.rollback().await?;
    Ok(())
}

use sea_orm::TransactionTrait;
use trivia_backend::adapters::categories_sea::{self, CategoryCreate};
use trivia_backend::adapters::clues_sea::ClueCreate;
use trivia_backend::db::require_db;
use trivia_backend::errors::domain::{ConflictKind, DomainError};
use trivia_backend::AppError;

use crate::support::factory::{seed_category, seed_clue, seed_eligible_clues};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn create_then_find_roundtrips_columns() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let created = categories_sea::create_category(&txn, CategoryCreate::new("Potent Potables")).await?;
    assert_eq!(created.id.len(), 26, "ids are ULIDs");
    assert!(!created.canon, "new categories default to non-canon");

    let found = categories_sea::find_by_id(&txn, &created.id)
        .await?
        .expect("category should exist");
    assert_eq!(found, created);

    assert!(categories_sea::find_by_id(&txn, "01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .await?
        .is_none());

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn duplicate_title_maps_to_unique_title_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    categories_sea::create_category(&txn, CategoryCreate::new("Opera")).await?;
    let err = categories_sea::create_category(&txn, CategoryCreate::new("Opera"))
        .await
        .expect_err("second insert must violate the unique title index");

    match DomainError::from(err) {
        DomainError::Conflict(ConflictKind::UniqueTitle, _) => {}
        other => panic!("expected UniqueTitle conflict, got {other:?}"),
    }

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn list_page_sorts_by_title_and_respects_window() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    for title in ["Zoology", "Anagrams", "Mythology"] {
        categories_sea::create_category(&txn, CategoryCreate::new(title)).await?;
    }

    let first_two = categories_sea::list_page(&txn, 0, 2).await?;
    let titles: Vec<_> = first_two.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Anagrams", "Mythology"]);

    let rest = categories_sea::list_page(&txn, 2, 2).await?;
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].title, "Zoology");

    assert_eq!(categories_sea::count_all(&txn).await?, 3);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn clue_counts_include_every_clue_state() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let busy = seed_category(&txn, "Rivers").await;
    let empty = seed_category(&txn, "Deserts").await;
    seed_eligible_clues(&txn, &busy.id, 2).await;
    seed_clue(
        &txn,
        ClueCreate::new(&busy.id, "Disputed", "What is a delta?", 800).with_invalid_count(3),
    )
    .await;

    let counts =
        categories_sea::count_clues_by_category(&txn, &[busy.id.clone(), empty.id.clone()])
            .await?;
    assert_eq!(counts.len(), 1, "categories without clues are absent");
    assert_eq!(counts[0].category_id, busy.id);
    assert_eq!(counts[0].num_clues, 3);

    assert_eq!(categories_sea::count_clues_for(&txn, &empty.id).await?, 0);
    assert!(categories_sea::count_clues_by_category(&txn, &[])
        .await?
        .is_empty());

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn update_and_delete_report_missing_rows() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let missing = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    assert!(categories_sea::update_title(&txn, missing, "Nope".into())
        .await?
        .is_none());
    assert_eq!(categories_sea::delete_by_id(&txn, missing).await?, 0);

    let category = seed_category(&txn, "Islands").await;
    let renamed = categories_sea::update_title(&txn, &category.id, "Archipelagos".into())
        .await?
        .expect("row exists");
    assert_eq!(renamed.title, "Archipelagos");
    assert_eq!(categories_sea::delete_by_id(&txn, &category.id).await?, 1);

    txn.rollback().await?;
    Ok(())
}

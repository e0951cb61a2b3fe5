use sea_orm::TransactionTrait;
use trivia_backend::adapters::clues_sea::ClueCreate;
use trivia_backend::adapters::games_sea::{self, GameCreate};
use trivia_backend::db::require_db;
use trivia_backend::AppError;

use crate::support::factory::{seed_category, seed_clue};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn count_clues_counts_only_aired_clues() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let txn = require_db(&state)?.begin().await?;

    let game = games_sea::create_game(&txn, GameCreate::new(4581, "2004-06-02")).await?;
    let other = games_sea::create_game(&txn, GameCreate::new(4582, "2004-06-03")).await?;
    let category = seed_category(&txn, "Rivers").await;

    for n in 0..3 {
        seed_clue(
            &txn,
            ClueCreate::new(&category.id, format!("Q{n}"), format!("A{n}"), 200).aired_in(&game.id),
        )
        .await;
    }
    seed_clue(
        &txn,
        ClueCreate::new(&category.id, "Elsewhere", "A", 400).aired_in(&other.id),
    )
    .await;
    seed_clue(&txn, ClueCreate::new(&category.id, "Never aired", "A", 400)).await;

    assert_eq!(games_sea::count_clues(&txn, &game.id).await?, 3);
    assert_eq!(games_sea::count_clues(&txn, &other.id).await?, 1);

    let found = games_sea::find_by_id(&txn, &game.id).await?.expect("exists");
    assert_eq!(found.episode_id, 4581);
    assert!(found.canon);

    txn.rollback().await?;
    Ok(())
}

use std::num::NonZeroU64;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, TransactionTrait};
use trivia_backend::db::require_db;
use trivia_backend::db::txn::with_txn;
use trivia_backend::entities::{game_definition_clues, game_definitions};
use trivia_backend::errors::domain::DomainError;
use trivia_backend::repos::clues::Clue;
use trivia_backend::services::{ClueSampler, CustomGameService};
use trivia_backend::{AppError, ErrorCode};
use ulid::Ulid;

use crate::support::factory::{seed_category, seed_eligible_clues};
use crate::support::test_state::build_test_state;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Hands back a fixed list, in order, regardless of the store.
struct FixedSampler(Vec<Clue>);

#[async_trait]
impl ClueSampler for FixedSampler {
    async fn sample<C>(&self, _conn: &C, n: NonZeroU64) -> Result<Vec<Clue>, DomainError>
    where
        C: ConnectionTrait + Send + Sync,
    {
        Ok(self.0.iter().take(n.get() as usize).cloned().collect())
    }
}

#[tokio::test]
async fn failed_link_insert_leaves_nothing_behind() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let seed = db.begin().await?;
    let category = seed_category(&seed, "Rivers").await;
    let real = seed_eligible_clues(&seed, &category.id, 3).await;
    seed.commit().await?;

    let phantom = Clue {
        id: Ulid::new().to_string(),
        answer: "What is nowhere?".to_string(),
        question: "This clue was never stored".to_string(),
        value: 200,
        invalid_count: 0,
        canon: true,
        category_id: category.id.clone(),
        game_id: None,
    };
    let picks = vec![real[0].clone(), real[1].clone(), phantom, real[2].clone()];
    let service = CustomGameService::new(FixedSampler(picks));

    let err = with_txn(None, &state, move |txn| {
        Box::pin(async move { Ok(service.create(txn).await?) })
    })
    .await
    .expect_err("third link references a missing clue");

    assert_eq!(err.code(), ErrorCode::FkViolation);
    assert_eq!(err.status().as_u16(), 409);

    assert_eq!(game_definitions::Entity::find().count(db).await?, 0);
    assert_eq!(game_definition_clues::Entity::find().count(db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn committed_game_is_readable_in_a_later_unit_of_work() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let seed = db.begin().await?;
    let category = seed_category(&seed, "Rivers").await;
    seed_eligible_clues(&seed, &category.id, 12).await;
    seed.commit().await?;

    let created = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service: CustomGameService = CustomGameService::default();
            Ok(service.create(txn).await?)
        })
    })
    .await?;
    assert_eq!(created.clues.len(), 12);

    let id = created.id.clone();
    let fetched = with_txn(None, &state, move |txn| {
        Box::pin(async move {
            let service: CustomGameService = CustomGameService::default();
            Ok(service.get(txn, &id).await?)
        })
    })
    .await?;

    assert_eq!(fetched.clue_ids(), created.clue_ids());
    assert_eq!(game_definitions::Entity::find().count(db).await?, 1);
    assert_eq!(game_definition_clues::Entity::find().count(db).await?, 12);
    Ok(())
}

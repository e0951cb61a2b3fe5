//! Random clue selection for custom games.

use std::num::NonZeroU64;

use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::errors::domain::DomainError;
use crate::repos::clues::{self, Clue};

/// Clues per custom game.
pub const CUSTOM_GAME_CLUE_COUNT: NonZeroU64 = match NonZeroU64::new(30) {
    Some(n) => n,
    None => panic!("clue count must be non-zero"),
};

/// Picks the clues for a new custom game.
///
/// Implementations return at most `n` distinct clues, all canon with zero
/// invalidations, in the order they should be played. Returning fewer than
/// `n` is allowed; the caller keeps whatever it gets.
#[async_trait]
pub trait ClueSampler: Send + Sync {
    async fn sample<C>(&self, conn: &C, n: NonZeroU64) -> Result<Vec<Clue>, DomainError>
    where
        C: ConnectionTrait + Send + Sync;
}

/// Uniform sample without replacement over eligible clues, via `ORDER BY RANDOM()`
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonClueSampler;

#[async_trait]
impl ClueSampler for CanonClueSampler {
    async fn sample<C>(&self, conn: &C, n: NonZeroU64) -> Result<Vec<Clue>, DomainError>
    where
        C: ConnectionTrait + Send + Sync,
    {
        let picked = clues::sample_eligible(conn, n.get()).await?;
        debug!(requested = n.get(), returned = picked.len(), "sampled clues");
        Ok(picked)
    }
}

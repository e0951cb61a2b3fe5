//! Custom game assembly and playback.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;
use tracing::{info, warn};

use super::sampler::{CanonClueSampler, ClueSampler, CUSTOM_GAME_CLUE_COUNT};
use crate::domain::custom_game::{custom_game_clue, custom_game_view, CustomGameView};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::categories::{self, Category};
use crate::repos::{clues, game_definitions};

/// Builds and reads persisted custom games.
pub struct CustomGameService<S = CanonClueSampler> {
    sampler: S,
}

impl Default for CustomGameService<CanonClueSampler> {
    fn default() -> Self {
        Self::new(CanonClueSampler)
    }
}

impl<S: ClueSampler> CustomGameService<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    /// Create a definition and link a fresh random sample of clues to it.
    ///
    /// Runs entirely inside `txn`; any error leaves nothing behind once the
    /// caller rolls back. With fewer than 30 eligible clues the game holds
    /// all of them, and with none it is created empty.
    pub async fn create(&self, txn: &DatabaseTransaction) -> Result<CustomGameView, DomainError> {
        let definition =
            game_definitions::create_definition(txn, now_to_microseconds()).await?;

        let sampled = self.sampler.sample(txn, CUSTOM_GAME_CLUE_COUNT).await?;
        if (sampled.len() as u64) < CUSTOM_GAME_CLUE_COUNT.get() {
            warn!(
                custom_game_id = %definition.id,
                requested = CUSTOM_GAME_CLUE_COUNT.get(),
                eligible = sampled.len(),
                "short sample; creating custom game with every eligible clue"
            );
        }

        let mut category_cache: HashMap<String, Category> = HashMap::new();
        let mut clues_out = Vec::with_capacity(sampled.len());
        for (position, clue) in sampled.into_iter().enumerate() {
            let category = resolve_category(txn, &mut category_cache, &clue.id, &clue.category_id)
                .await?;
            game_definitions::insert_link(txn, &definition.id, &clue.id, position).await?;
            clues_out.push(custom_game_clue(clue, &category)?);
        }

        info!(
            custom_game_id = %definition.id,
            clue_count = clues_out.len(),
            "custom game created"
        );
        Ok(custom_game_view(definition, clues_out))
    }

    /// Rebuild a stored custom game, clues in their original sample order.
    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        definition_id: &str,
    ) -> Result<CustomGameView, DomainError> {
        let definition = game_definitions::find_by_id(conn, definition_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::CustomGame,
                    format!("Custom game {definition_id} not found"),
                )
            })?;

        let links = game_definitions::links_for(conn, definition_id).await?;
        let mut category_cache: HashMap<String, Category> = HashMap::new();
        let mut clues_out = Vec::with_capacity(links.len());
        for link in links {
            let clue = clues::find_by_id(conn, &link.clue_id).await?.ok_or_else(|| {
                DomainError::data_integrity(format!(
                    "Custom game {definition_id} links missing clue {} at position {}",
                    link.clue_id, link.position
                ))
            })?;
            let category =
                resolve_category(conn, &mut category_cache, &clue.id, &clue.category_id).await?;
            clues_out.push(custom_game_clue(clue, &category)?);
        }

        Ok(custom_game_view(definition, clues_out))
    }
}

/// Look up a clue's category, memoized for the duration of one call.
async fn resolve_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    cache: &mut HashMap<String, Category>,
    clue_id: &str,
    category_id: &str,
) -> Result<Category, DomainError> {
    if let Some(hit) = cache.get(category_id) {
        return Ok(hit.clone());
    }
    let category = categories::find_by_id(conn, category_id)
        .await?
        .ok_or_else(|| {
            DomainError::data_integrity(format!(
                "Clue {clue_id} references missing category {category_id}"
            ))
        })?;
    cache.insert(category_id.to_owned(), category.clone());
    Ok(category)
}

/// Stores keep microseconds at most; truncate so create and get agree.
fn now_to_microseconds() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_microsecond(now.microsecond()).unwrap_or(now)
}

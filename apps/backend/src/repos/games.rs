//! Recorded game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::DomainError;

/// An aired episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedGame {
    pub id: String,
    pub episode_id: i32,
    pub aired: String,
    pub canon: bool,
}

impl From<games::Model> for RecordedGame {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            episode_id: model.episode_id,
            aired: model.aired,
            canon: model.canon,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<RecordedGame>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(RecordedGame::from))
}

pub async fn count_clues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<u64, DomainError> {
    Ok(games_adapter::count_clues(conn, game_id).await?)
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: games_adapter::GameCreate,
) -> Result<RecordedGame, DomainError> {
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(RecordedGame::from(game))
}

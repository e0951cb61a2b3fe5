//! Recorded game lookup.

use sea_orm::ConnectionTrait;

use crate::domain::catalog::{game_view, GameView};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games;

#[derive(Debug, Default)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// `total_amount_won` is the number of clues that aired in the game.
    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: &str,
    ) -> Result<GameView, DomainError> {
        let game = games::find_by_id(conn, game_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
        })?;
        let aired = games::count_clues(conn, game_id).await?;
        Ok(game_view(game, aired))
    }
}

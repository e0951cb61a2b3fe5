//! SeaORM adapter for recorded games - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use ulid::Ulid;

use crate::entities::{clues, games};

pub mod dto;

pub use dto::GameCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id.to_owned()).one(conn).await
}

/// Number of clues that aired in the game.
pub async fn count_clues<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    clues::Entity::find()
        .filter(clues::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = games::ActiveModel {
        id: Set(Ulid::new().to_string()),
        episode_id: Set(dto.episode_id),
        aired: Set(dto.aired),
        canon: Set(dto.canon),
    };
    game.insert(conn).await
}

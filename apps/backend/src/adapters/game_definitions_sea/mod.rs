//! SeaORM adapter for custom game definitions and their clue links.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::entities::{game_definition_clues, game_definitions};

pub mod dto;

pub use dto::DefinitionClueLink;

pub async fn create_definition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    created_on: OffsetDateTime,
) -> Result<game_definitions::Model, sea_orm::DbErr> {
    let definition = game_definitions::ActiveModel {
        id: Set(Ulid::new().to_string()),
        created_on: Set(created_on),
    };
    definition.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    definition_id: &str,
) -> Result<Option<game_definitions::Model>, sea_orm::DbErr> {
    game_definitions::Entity::find_by_id(definition_id.to_owned())
        .one(conn)
        .await
}

pub async fn insert_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    link: DefinitionClueLink,
) -> Result<(), sea_orm::DbErr> {
    let row = game_definition_clues::ActiveModel {
        game_definition_id: Set(link.game_definition_id),
        clue_id: Set(link.clue_id),
        position: Set(link.position),
    };
    game_definition_clues::Entity::insert(row)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// All links of a definition, by ascending position.
pub async fn links_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    definition_id: &str,
) -> Result<Vec<game_definition_clues::Model>, sea_orm::DbErr> {
    game_definition_clues::Entity::find()
        .filter(game_definition_clues::Column::GameDefinitionId.eq(definition_id))
        .order_by_asc(game_definition_clues::Column::Position)
        .all(conn)
        .await
}

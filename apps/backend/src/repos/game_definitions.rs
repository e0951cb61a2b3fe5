//! Custom game definition repository functions for domain layer.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::game_definitions_sea as definitions_adapter;
use crate::entities::{game_definition_clues, game_definitions};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDefinition {
    pub id: String,
    pub created_on: OffsetDateTime,
}

impl From<game_definitions::Model> for GameDefinition {
    fn from(model: game_definitions::Model) -> Self {
        Self {
            id: model.id,
            created_on: model.created_on,
        }
    }
}

/// Clue at a 0-based position within a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionLink {
    pub clue_id: String,
    pub position: u16,
}

impl From<game_definition_clues::Model> for DefinitionLink {
    fn from(model: game_definition_clues::Model) -> Self {
        Self {
            clue_id: model.clue_id,
            position: model.position.max(0) as u16,
        }
    }
}

pub async fn create_definition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    created_on: OffsetDateTime,
) -> Result<GameDefinition, DomainError> {
    let definition = definitions_adapter::create_definition(conn, created_on).await?;
    Ok(GameDefinition::from(definition))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    definition_id: &str,
) -> Result<Option<GameDefinition>, DomainError> {
    let definition = definitions_adapter::find_by_id(conn, definition_id).await?;
    Ok(definition.map(GameDefinition::from))
}

pub async fn insert_link<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    definition_id: &str,
    clue_id: &str,
    position: usize,
) -> Result<(), DomainError> {
    let position = i16::try_from(position).map_err(|_| {
        DomainError::validation(
            ValidationKind::Other("POSITION_RANGE".into()),
            format!("Link position {position} out of range"),
        )
    })?;
    definitions_adapter::insert_link(
        conn,
        definitions_adapter::DefinitionClueLink {
            game_definition_id: definition_id.to_owned(),
            clue_id: clue_id.to_owned(),
            position,
        },
    )
    .await?;
    Ok(())
}

/// Links in ascending position order.
pub async fn links_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    definition_id: &str,
) -> Result<Vec<DefinitionLink>, DomainError> {
    let links = definitions_adapter::links_for(conn, definition_id).await?;
    Ok(links.into_iter().map(DefinitionLink::from).collect())
}

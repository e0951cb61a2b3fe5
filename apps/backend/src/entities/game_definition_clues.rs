use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Link row: one sampled clue at one position of a game definition
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_definition_clues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "game_definition_id")]
    pub game_definition_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "SmallInteger")]
    pub position: i16,
    #[sea_orm(column_name = "clue_id")]
    pub clue_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_definitions::Entity",
        from = "Column::GameDefinitionId",
        to = "super::game_definitions::Column::Id"
    )]
    GameDefinition,
    #[sea_orm(
        belongs_to = "super::clues::Entity",
        from = "Column::ClueId",
        to = "super::clues::Column::Id"
    )]
    Clue,
}

impl Related<super::game_definitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameDefinition.def()
    }
}

impl Related<super::clues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

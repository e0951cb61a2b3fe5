use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_definitions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "created_on")]
    pub created_on: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_definition_clues::Entity")]
    GameDefinitionClues,
}

impl Related<super::game_definition_clues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameDefinitionClues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

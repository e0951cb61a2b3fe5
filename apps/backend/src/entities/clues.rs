use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub value: i32,
    #[sea_orm(column_name = "invalid_count")]
    pub invalid_count: i32,
    pub canon: bool,
    #[sea_orm(column_name = "category_id")]
    pub category_id: String,
    #[sea_orm(column_name = "game_id")]
    pub game_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id"
    )]
    Game,
    #[sea_orm(has_many = "super::game_definition_clues::Entity")]
    GameDefinitionClues,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::game_definition_clues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameDefinitionClues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

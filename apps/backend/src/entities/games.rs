use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A recorded broadcast episode
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "episode_id")]
    pub episode_id: i32,
    pub aired: String,
    pub canon: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::clues::Entity")]
    Clues,
}

impl Related<super::clues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

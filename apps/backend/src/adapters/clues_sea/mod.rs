//! SeaORM adapter for clues - generic over ConnectionTrait.

use sea_orm::sea_query::{Expr, Order};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use ulid::Ulid;

use crate::entities::{categories, clues};

pub mod dto;

pub use dto::ClueCreate;

/// Clues fit for play: canon and never reported invalid.
fn eligible() -> Select<clues::Entity> {
    clues::Entity::find()
        .filter(clues::Column::Canon.eq(true))
        .filter(clues::Column::InvalidCount.eq(0))
}

/// Clues with no invalidations, canon or not (listing and lookup).
fn valid() -> Select<clues::Entity> {
    clues::Entity::find().filter(clues::Column::InvalidCount.eq(0))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    clue_id: &str,
) -> Result<Option<clues::Model>, sea_orm::DbErr> {
    clues::Entity::find_by_id(clue_id.to_owned()).one(conn).await
}

/// A clue with its category; `only_valid` hides clues with invalidations.
pub async fn find_with_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    clue_id: &str,
    only_valid: bool,
) -> Result<Option<(clues::Model, Option<categories::Model>)>, sea_orm::DbErr> {
    let select = if only_valid {
        valid()
    } else {
        clues::Entity::find()
    };
    select
        .filter(clues::Column::Id.eq(clue_id))
        .find_also_related(categories::Entity)
        .one(conn)
        .await
}

/// One page of valid clues with their categories, in id order.
pub async fn list_valid_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<(clues::Model, Option<categories::Model>)>, sea_orm::DbErr> {
    valid()
        .order_by_asc(clues::Column::Id)
        .offset(offset)
        .limit(limit)
        .find_also_related(categories::Entity)
        .all(conn)
        .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    clues::Entity::find().count(conn).await
}

/// Uniform random sample without replacement of eligible clues.
///
/// Returns fewer than `limit` rows when fewer are eligible.
pub async fn sample_eligible<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<clues::Model>, sea_orm::DbErr> {
    eligible()
        .order_by(Expr::cust("RANDOM()"), Order::Asc)
        .limit(limit)
        .all(conn)
        .await
}

/// One random clue with its category; `only_valid` restricts to clues
/// without invalidations.
pub async fn random_with_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    only_valid: bool,
) -> Result<Option<(clues::Model, Option<categories::Model>)>, sea_orm::DbErr> {
    let select = if only_valid {
        valid()
    } else {
        clues::Entity::find()
    };
    select
        .order_by(Expr::cust("RANDOM()"), Order::Asc)
        .find_also_related(categories::Entity)
        .one(conn)
        .await
}

/// Bump `invalid_count` by one; returns the number of rows touched.
pub async fn increment_invalid_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    clue_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = clues::Entity::update_many()
        .col_expr(
            clues::Column::InvalidCount,
            Expr::col(clues::Column::InvalidCount).add(1),
        )
        .filter(clues::Column::Id.eq(clue_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn create_clue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ClueCreate,
) -> Result<clues::Model, sea_orm::DbErr> {
    let clue = clues::ActiveModel {
        id: Set(Ulid::new().to_string()),
        answer: Set(dto.answer),
        question: Set(dto.question),
        value: Set(dto.value),
        invalid_count: Set(dto.invalid_count),
        canon: Set(dto.canon),
        category_id: Set(dto.category_id),
        game_id: Set(dto.game_id),
    };
    clue.insert(conn).await
}

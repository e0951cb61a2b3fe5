//! SeaORM adapter for categories - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use ulid::Ulid;

use crate::entities::{categories, clues};

pub mod dto;

pub use dto::{CategoryClueCount, CategoryCreate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find_by_id(category_id.to_owned())
        .one(conn)
        .await
}

/// One page of categories sorted by title.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<categories::Model>, sea_orm::DbErr> {
    categories::Entity::find()
        .order_by_asc(categories::Column::Title)
        .order_by_asc(categories::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn count_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    categories::Entity::find().count(conn).await
}

/// Number of clues (any state) per category, for the given category ids.
///
/// Categories without clues are absent from the result.
pub async fn count_clues_by_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_ids: &[String],
) -> Result<Vec<CategoryClueCount>, sea_orm::DbErr> {
    if category_ids.is_empty() {
        return Ok(Vec::new());
    }
    clues::Entity::find()
        .select_only()
        .column(clues::Column::CategoryId)
        .column_as(clues::Column::Id.count(), "num_clues")
        .filter(clues::Column::CategoryId.is_in(category_ids.iter().cloned()))
        .group_by(clues::Column::CategoryId)
        .into_model::<CategoryClueCount>()
        .all(conn)
        .await
}

pub async fn count_clues_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    clues::Entity::find()
        .filter(clues::Column::CategoryId.eq(category_id))
        .count(conn)
        .await
}

pub async fn create_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CategoryCreate,
) -> Result<categories::Model, sea_orm::DbErr> {
    let category = categories::ActiveModel {
        id: Set(Ulid::new().to_string()),
        title: Set(dto.title),
        canon: Set(dto.canon),
    };
    category.insert(conn).await
}

/// Rename a category; returns `None` when the id does not exist.
pub async fn update_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
    title: String,
) -> Result<Option<categories::Model>, sea_orm::DbErr> {
    let Some(existing) = find_by_id(conn, category_id).await? else {
        return Ok(None);
    };
    let mut active: categories::ActiveModel = existing.into();
    active.title = Set(title);
    active.update(conn).await.map(Some)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = categories::Entity::delete_by_id(category_id.to_owned())
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

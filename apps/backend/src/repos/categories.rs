//! Category repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::categories_sea as categories_adapter;
use crate::entities::categories;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub canon: bool,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            canon: model.canon,
        }
    }
}

/// A category plus the number of clues filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub num_clues: u64,
}

fn not_found(category_id: &str) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Category,
        format!("Category {category_id} not found"),
    )
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
) -> Result<Option<Category>, DomainError> {
    let category = categories_adapter::find_by_id(conn, category_id).await?;
    Ok(category.map(Category::from))
}

pub async fn require_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
) -> Result<Category, DomainError> {
    find_by_id(conn, category_id)
        .await?
        .ok_or_else(|| not_found(category_id))
}

/// One title-sorted page with clue counts, plus the total category count.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<(Vec<CategoryWithCount>, u64), DomainError> {
    let page = categories_adapter::list_page(conn, offset, limit).await?;
    let ids: Vec<String> = page.iter().map(|c| c.id.clone()).collect();
    let counts: HashMap<String, u64> = categories_adapter::count_clues_by_category(conn, &ids)
        .await?
        .into_iter()
        .map(|row| (row.category_id, row.num_clues.max(0) as u64))
        .collect();
    let total = categories_adapter::count_all(conn).await?;

    let rows = page
        .into_iter()
        .map(|model| {
            let num_clues = counts.get(&model.id).copied().unwrap_or(0);
            CategoryWithCount {
                category: Category::from(model),
                num_clues,
            }
        })
        .collect();
    Ok((rows, total))
}

pub async fn create_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: categories_adapter::CategoryCreate,
) -> Result<Category, DomainError> {
    let category = categories_adapter::create_category(conn, dto).await?;
    Ok(Category::from(category))
}

pub async fn rename<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
    title: String,
) -> Result<Category, DomainError> {
    categories_adapter::update_title(conn, category_id, title)
        .await?
        .map(Category::from)
        .ok_or_else(|| not_found(category_id))
}

/// Delete a category that no clue references; returns the removed row.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    category_id: &str,
) -> Result<Category, DomainError> {
    let category = require_category(conn, category_id).await?;

    let in_use = categories_adapter::count_clues_for(conn, category_id).await?;
    if in_use > 0 {
        return Err(DomainError::conflict(
            ConflictKind::ForeignKey,
            format!("Category {category_id} still has {in_use} clues"),
        ));
    }

    if categories_adapter::delete_by_id(conn, category_id).await? == 0 {
        return Err(not_found(category_id));
    }
    Ok(category)
}

//! Category browsing and editing.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::adapters::categories_sea::CategoryCreate;
use crate::domain::catalog::{CategoryPage, CategorySummary, CategoryView};
use crate::domain::pagination::{category_page_count, Page};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::categories;

#[derive(Debug, Default)]
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        page: Page,
    ) -> Result<CategoryPage, DomainError> {
        let (rows, total) = categories::list_page(conn, page.offset(), page.limit()).await?;
        Ok(CategoryPage {
            page_count: category_page_count(total),
            categories: rows.into_iter().map(CategorySummary::from).collect(),
        })
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        category_id: &str,
    ) -> Result<CategoryView, DomainError> {
        Ok(categories::require_category(conn, category_id).await?.into())
    }

    /// New categories are never canon.
    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        title: &str,
    ) -> Result<CategoryView, DomainError> {
        let title = normalize_title(title)?;
        let category = categories::create_category(conn, CategoryCreate::new(title)).await?;
        info!(category_id = %category.id, "category created");
        Ok(category.into())
    }

    pub async fn rename<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        category_id: &str,
        title: &str,
    ) -> Result<CategoryView, DomainError> {
        let title = normalize_title(title)?;
        Ok(categories::rename(conn, category_id, title).await?.into())
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        category_id: &str,
    ) -> Result<CategoryView, DomainError> {
        let removed = categories::delete(conn, category_id).await?;
        info!(category_id = %removed.id, "category deleted");
        Ok(removed.into())
    }
}

fn normalize_title(raw: &str) -> Result<String, DomainError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::BlankTitle,
            "Category title must not be blank",
        ));
    }
    Ok(title.to_string())
}

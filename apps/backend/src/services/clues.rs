//! Clue browsing and invalidation reports.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::catalog::{CluePage, ClueView};
use crate::domain::pagination::{clue_page_count, Page};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::clues;

#[derive(Debug, Default)]
pub struct ClueService;

fn not_found(clue_id: &str) -> DomainError {
    DomainError::not_found(NotFoundKind::Clue, format!("Clue {clue_id} not found"))
}

impl ClueService {
    pub fn new() -> Self {
        Self
    }

    /// Clues without invalidations; `page_count` counts every clue.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        page: Page,
    ) -> Result<CluePage, DomainError> {
        let (rows, total) = clues::list_valid_page(conn, page.offset(), page.limit()).await?;
        Ok(CluePage {
            page_count: clue_page_count(total),
            clues: rows.into_iter().map(ClueView::from).collect(),
        })
    }

    /// Invalidated clues are reported as missing.
    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        clue_id: &str,
    ) -> Result<ClueView, DomainError> {
        clues::find_with_category(conn, clue_id, true)
            .await?
            .map(ClueView::from)
            .ok_or_else(|| not_found(clue_id))
    }

    pub async fn random<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        only_valid: bool,
    ) -> Result<ClueView, DomainError> {
        clues::random_with_category(conn, only_valid)
            .await?
            .map(ClueView::from)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Clue, "No clues available"))
    }

    /// Record an invalidation report and return the clue as it now stands.
    pub async fn invalidate<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        clue_id: &str,
    ) -> Result<ClueView, DomainError> {
        if !clues::increment_invalid_count(conn, clue_id).await? {
            return Err(not_found(clue_id));
        }
        let updated = clues::find_with_category(conn, clue_id, false)
            .await?
            .ok_or_else(|| not_found(clue_id))?;
        info!(
            clue_id,
            invalid_count = updated.clue.invalid_count,
            "clue reported invalid"
        );
        Ok(updated.into())
    }
}

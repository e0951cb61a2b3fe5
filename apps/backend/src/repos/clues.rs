//! Clue repository functions for domain layer.

use sea_orm::ConnectionTrait;

use super::categories::Category;
use crate::adapters::clues_sea as clues_adapter;
use crate::entities::{categories, clues};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub id: String,
    pub answer: String,
    pub question: String,
    pub value: i32,
    pub invalid_count: i32,
    pub canon: bool,
    pub category_id: String,
    pub game_id: Option<String>,
}

impl Clue {
    /// Canon and never reported invalid.
    pub fn is_eligible(&self) -> bool {
        self.canon && self.invalid_count == 0
    }
}

impl From<clues::Model> for Clue {
    fn from(model: clues::Model) -> Self {
        Self {
            id: model.id,
            answer: model.answer,
            question: model.question,
            value: model.value,
            invalid_count: model.invalid_count,
            canon: model.canon,
            category_id: model.category_id,
            game_id: model.game_id,
        }
    }
}

/// A clue joined with the category it is filed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueWithCategory {
    pub clue: Clue,
    pub category: Category,
}

fn join(
    (clue, category): (clues::Model, Option<categories::Model>),
) -> Result<ClueWithCategory, DomainError> {
    let clue = Clue::from(clue);
    match category {
        Some(category) => Ok(ClueWithCategory {
            clue,
            category: Category::from(category),
        }),
        None => Err(DomainError::data_integrity(format!(
            "Clue {} references missing category {}",
            clue.id, clue.category_id
        ))),
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    clue_id: &str,
) -> Result<Option<Clue>, DomainError> {
    let clue = clues_adapter::find_by_id(conn, clue_id).await?;
    Ok(clue.map(Clue::from))
}

/// A clue with its category; `only_valid` hides clues with invalidations.
pub async fn find_with_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    clue_id: &str,
    only_valid: bool,
) -> Result<Option<ClueWithCategory>, DomainError> {
    clues_adapter::find_with_category(conn, clue_id, only_valid)
        .await?
        .map(join)
        .transpose()
}

/// One page of valid clues, plus the count of all clues.
pub async fn list_valid_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<(Vec<ClueWithCategory>, u64), DomainError> {
    let rows = clues_adapter::list_valid_page(conn, offset, limit)
        .await?
        .into_iter()
        .map(join)
        .collect::<Result<Vec<_>, _>>()?;
    let total = clues_adapter::count_all(conn).await?;
    Ok((rows, total))
}

pub async fn sample_eligible<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<Clue>, DomainError> {
    let rows = clues_adapter::sample_eligible(conn, limit).await?;
    Ok(rows.into_iter().map(Clue::from).collect())
}

pub async fn random_with_category<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    only_valid: bool,
) -> Result<Option<ClueWithCategory>, DomainError> {
    clues_adapter::random_with_category(conn, only_valid)
        .await?
        .map(join)
        .transpose()
}

/// Record one more invalidation report; `false` when the clue is missing.
pub async fn increment_invalid_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    clue_id: &str,
) -> Result<bool, DomainError> {
    Ok(clues_adapter::increment_invalid_count(conn, clue_id).await? > 0)
}

pub async fn create_clue<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: clues_adapter::ClueCreate,
) -> Result<Clue, DomainError> {
    let clue = clues_adapter::create_clue(conn, dto).await?;
    Ok(Clue::from(clue))
}

//! Denormalized custom game views.
//!
//! `CustomGameService::create` and `::get` both build their response
//! through these functions, so the two endpoints always agree on shape.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::DomainError;
use crate::repos::categories::Category;
use crate::repos::clues::Clue;
use crate::repos::game_definitions::GameDefinition;

/// Category as embedded in a custom game clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGameClue {
    pub id: String,
    pub answer: String,
    pub question: String,
    pub value: i32,
    pub invalid_count: i32,
    pub canon: bool,
    pub category: CategoryRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGameView {
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_on: OffsetDateTime,
    pub clues: Vec<CustomGameClue>,
}

impl CustomGameView {
    pub fn clue_ids(&self) -> Vec<&str> {
        self.clues.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Embed `category` into `clue`; the category must be the one the clue references.
pub fn custom_game_clue(clue: Clue, category: &Category) -> Result<CustomGameClue, DomainError> {
    if clue.category_id != category.id {
        return Err(DomainError::data_integrity(format!(
            "Clue {} belongs to category {}, not {}",
            clue.id, clue.category_id, category.id
        )));
    }
    Ok(CustomGameClue {
        id: clue.id,
        answer: clue.answer,
        question: clue.question,
        value: clue.value,
        invalid_count: clue.invalid_count,
        canon: clue.canon,
        category: CategoryRef {
            id: category.id.clone(),
            title: category.title.clone(),
        },
    })
}

pub fn custom_game_view(definition: GameDefinition, clues: Vec<CustomGameClue>) -> CustomGameView {
    CustomGameView {
        id: definition.id,
        created_on: definition.created_on,
        clues,
    }
}

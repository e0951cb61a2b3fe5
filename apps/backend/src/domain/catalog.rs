//! Response views for the category, clue, and recorded game endpoints.

use serde::{Deserialize, Serialize};

use crate::repos::categories::{Category, CategoryWithCount};
use crate::repos::clues::ClueWithCategory;
use crate::repos::games::RecordedGame;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: String,
    pub title: String,
    pub canon: bool,
}

impl From<Category> for CategoryView {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            title: c.title,
            canon: c.canon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub title: String,
    pub canon: bool,
    pub num_clues: u64,
}

impl From<CategoryWithCount> for CategorySummary {
    fn from(row: CategoryWithCount) -> Self {
        Self {
            id: row.category.id,
            title: row.category.title,
            canon: row.category.canon,
            num_clues: row.num_clues,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPage {
    pub page_count: u64,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueView {
    pub id: String,
    pub answer: String,
    pub question: String,
    pub value: i32,
    pub invalid_count: i32,
    pub canon: bool,
    pub category: CategoryView,
}

impl From<ClueWithCategory> for ClueView {
    fn from(row: ClueWithCategory) -> Self {
        let ClueWithCategory { clue, category } = row;
        Self {
            id: clue.id,
            answer: clue.answer,
            question: clue.question,
            value: clue.value,
            invalid_count: clue.invalid_count,
            canon: clue.canon,
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CluePage {
    pub page_count: u64,
    pub clues: Vec<ClueView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub id: String,
    pub episode_id: i32,
    pub aired: String,
    pub canon: bool,
    pub total_amount_won: u64,
}

pub fn game_view(game: RecordedGame, total_amount_won: u64) -> GameView {
    GameView {
        id: game.id,
        episode_id: game.episode_id,
        aired: game.aired,
        canon: game.canon,
        total_amount_won,
    }
}

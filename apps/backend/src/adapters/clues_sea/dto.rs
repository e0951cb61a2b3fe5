//! DTOs for clues_sea adapter.

/// DTO for inserting a clue (content import and tests).
#[derive(Debug, Clone)]
pub struct ClueCreate {
    pub answer: String,
    pub question: String,
    pub value: i32,
    pub canon: bool,
    pub invalid_count: i32,
    pub category_id: String,
    pub game_id: Option<String>,
}

impl ClueCreate {
    /// A canon clue with no invalidations.
    pub fn new(
        category_id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        value: i32,
    ) -> Self {
        Self {
            answer: answer.into(),
            question: question.into(),
            value,
            canon: true,
            invalid_count: 0,
            category_id: category_id.into(),
            game_id: None,
        }
    }

    pub fn non_canon(mut self) -> Self {
        self.canon = false;
        self
    }

    pub fn with_invalid_count(mut self, invalid_count: i32) -> Self {
        self.invalid_count = invalid_count;
        self
    }

    pub fn aired_in(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }
}

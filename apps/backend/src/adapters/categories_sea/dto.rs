//! DTOs for categories_sea adapter.

/// DTO for creating a new category.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub title: String,
    pub canon: bool,
}

impl CategoryCreate {
    /// User-created categories are never canon.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            canon: false,
        }
    }

    pub fn canon(mut self) -> Self {
        self.canon = true;
        self
    }
}

/// Row shape for the per-category clue count query.
#[derive(Debug, Clone, sea_orm::FromQueryResult)]
pub struct CategoryClueCount {
    pub category_id: String,
    pub num_clues: i64,
}

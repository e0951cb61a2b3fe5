//! DTOs for games_sea adapter.

/// DTO for recording an aired episode.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub episode_id: i32,
    pub aired: String,
    pub canon: bool,
}

impl GameCreate {
    pub fn new(episode_id: i32, aired: impl Into<String>) -> Self {
        Self {
            episode_id,
            aired: aired.into(),
            canon: true,
        }
    }

    pub fn non_canon(mut self) -> Self {
        self.canon = false;
        self
    }
}

//! Application services: one per resource, each over repos functions.

pub mod categories;
pub mod clues;
pub mod custom_games;
pub mod games;
pub mod sampler;

pub use categories::CategoryService;
pub use clues::ClueService;
pub use custom_games::CustomGameService;
pub use games::GameService;
pub use sampler::{CanonClueSampler, ClueSampler, CUSTOM_GAME_CLUE_COUNT};

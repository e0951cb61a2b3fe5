//! SeaORM adapters, one per table family. Functions return `DbErr`;
//! the repos layer maps to `DomainError`.

pub mod categories_sea;
pub mod clues_sea;
pub mod game_definitions_sea;
pub mod games_sea;

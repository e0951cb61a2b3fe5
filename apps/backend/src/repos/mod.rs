//! Repository functions: domain models over the SeaORM adapters.
//!
//! Every function is generic over `ConnectionTrait` so callers can pass a
//! pooled connection or a `DatabaseTransaction`; errors are `DomainError`.

pub mod categories;
pub mod clues;
pub mod game_definitions;
pub mod games;

//! Domain layer: pagination rules and the typed response views.

pub mod catalog;
pub mod custom_game;
pub mod pagination;

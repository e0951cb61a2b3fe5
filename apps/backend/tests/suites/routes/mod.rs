pub mod categories;
pub mod custom_games;
pub mod games;
pub mod trace_id;

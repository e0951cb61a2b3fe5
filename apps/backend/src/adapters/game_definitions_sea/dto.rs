//! DTOs for game_definitions_sea adapter.

/// DTO for one link row of a game definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionClueLink {
    pub game_definition_id: String,
    pub clue_id: String,
    pub position: i16,
}

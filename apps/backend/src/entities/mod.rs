pub mod categories;
pub mod clues;
pub mod game_definition_clues;
pub mod game_definitions;
pub mod games;

pub use categories::Entity as Categories;
pub use categories::Model as Category;
pub use clues::Entity as Clues;
pub use clues::Model as Clue;
pub use game_definition_clues::Entity as GameDefinitionClues;
pub use game_definition_clues::Model as GameDefinitionClue;
pub use game_definitions::Entity as GameDefinitions;
pub use game_definitions::Model as GameDefinition;
pub use games::Entity as Games;
pub use games::Model as Game;

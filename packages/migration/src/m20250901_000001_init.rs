use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Title,
    Canon,
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    EpisodeId,
    Aired,
    Canon,
}

#[derive(Iden)]
enum Clues {
    Table,
    Id,
    Answer,
    Question,
    Value,
    InvalidCount,
    Canon,
    CategoryId,
    GameId,
}

#[derive(Iden)]
enum GameDefinitions {
    Table,
    Id,
    CreatedOn,
}

#[derive(Iden)]
enum GameDefinitionClues {
    Table,
    GameDefinitionId,
    ClueId,
    Position,
}

/// Record ids are ULID strings (26 chars, Crockford base32).
fn id_col<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name).string_len(26).not_null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // categories
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(id_col(Categories::Id).primary_key())
                    .col(ColumnDef::new(Categories::Title).string().not_null())
                    .col(
                        ColumnDef::new(Categories::Canon)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_categories_title")
                    .table(Categories::Table)
                    .col(Categories::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // games (recorded episodes)
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(id_col(Games::Id).primary_key())
                    .col(ColumnDef::new(Games::EpisodeId).integer().not_null())
                    .col(ColumnDef::new(Games::Aired).string().not_null())
                    .col(
                        ColumnDef::new(Games::Canon)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // clues
        manager
            .create_table(
                Table::create()
                    .table(Clues::Table)
                    .if_not_exists()
                    .col(id_col(Clues::Id).primary_key())
                    .col(ColumnDef::new(Clues::Answer).text().not_null())
                    .col(ColumnDef::new(Clues::Question).text().not_null())
                    .col(ColumnDef::new(Clues::Value).integer().not_null())
                    .col(
                        ColumnDef::new(Clues::InvalidCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Clues::Canon)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(id_col(Clues::CategoryId))
                    .col(ColumnDef::new(Clues::GameId).string_len(26).null())
                    .check(Expr::col(Clues::InvalidCount).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clues_category_id")
                            .from(Clues::Table, Clues::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clues_game_id")
                            .from(Clues::Table, Clues::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clues_category_id")
                    .table(Clues::Table)
                    .col(Clues::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clues_game_id")
                    .table(Clues::Table)
                    .col(Clues::GameId)
                    .to_owned(),
            )
            .await?;

        // Sampling filters on both flags
        manager
            .create_index(
                Index::create()
                    .name("idx_clues_canon_invalid_count")
                    .table(Clues::Table)
                    .col(Clues::Canon)
                    .col(Clues::InvalidCount)
                    .to_owned(),
            )
            .await?;

        // game_definitions
        manager
            .create_table(
                Table::create()
                    .table(GameDefinitions::Table)
                    .if_not_exists()
                    .col(id_col(GameDefinitions::Id).primary_key())
                    .col(
                        ColumnDef::new(GameDefinitions::CreatedOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // game_definition_clues
        manager
            .create_table(
                Table::create()
                    .table(GameDefinitionClues::Table)
                    .if_not_exists()
                    .col(id_col(GameDefinitionClues::GameDefinitionId))
                    .col(id_col(GameDefinitionClues::ClueId))
                    .col(
                        ColumnDef::new(GameDefinitionClues::Position)
                            .small_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GameDefinitionClues::GameDefinitionId)
                            .col(GameDefinitionClues::Position),
                    )
                    .check(Expr::col(GameDefinitionClues::Position).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_definition_clues_definition_id")
                            .from(
                                GameDefinitionClues::Table,
                                GameDefinitionClues::GameDefinitionId,
                            )
                            .to(GameDefinitions::Table, GameDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_definition_clues_clue_id")
                            .from(GameDefinitionClues::Table, GameDefinitionClues::ClueId)
                            .to(Clues::Table, Clues::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_definition_clues_definition_clue")
                    .table(GameDefinitionClues::Table)
                    .col(GameDefinitionClues::GameDefinitionId)
                    .col(GameDefinitionClues::ClueId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first
        manager
            .drop_table(
                Table::drop()
                    .table(GameDefinitionClues::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(GameDefinitions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Clues::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Scores {
    Table,
    Id,
    PlayerName,
    Score,
    Word,
    CreatedAt,
}

#[derive(Iden)]
enum DailyWords {
    Table,
    Id,
    Day,
    Word,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // scores: append-only leaderboard entries for finished rounds
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scores::PlayerName).text().not_null())
                    .col(ColumnDef::new(Scores::Score).big_integer().not_null())
                    .col(ColumnDef::new(Scores::Word).text().not_null())
                    .col(
                        ColumnDef::new(Scores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Leaderboard reads are ORDER BY score DESC LIMIT n
        manager
            .create_index(
                Index::create()
                    .name("idx_scores_score")
                    .table(Scores::Table)
                    .col(Scores::Score)
                    .to_owned(),
            )
            .await?;

        // daily_words: one assigned word per calendar day
        manager
            .create_table(
                Table::create()
                    .table(DailyWords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyWords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DailyWords::Day).date().not_null().unique_key())
                    .col(ColumnDef::new(DailyWords::Word).text().not_null())
                    .col(
                        ColumnDef::new(DailyWords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyWords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await?;
        Ok(())
    }
}

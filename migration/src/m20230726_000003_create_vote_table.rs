use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20230726_000001_create_user_table::User, m20230726_000002_create_message_table::Message,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::MessageId))
                    .col(integer(Vote::UserId))
                    .col(string_len(Vote::Direction, 4))
                    .col(timestamp_with_time_zone(Vote::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_message_id")
                            .from(Vote::Table, Vote::MessageId)
                            .to(Message::Table, Message::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_user_id")
                            .from(Vote::Table, Vote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vote_message_id")
                    .table(Vote::Table)
                    .col(Vote::MessageId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vote {
    Table,
    Id,
    MessageId,
    UserId,
    Direction,
    CreatedAt,
}

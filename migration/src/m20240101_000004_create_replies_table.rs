use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Replies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Replies::Id)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Replies::CommentId).string_len(50).not_null())
                    .col(ColumnDef::new(Replies::ThreadId).string_len(50).not_null())
                    .col(ColumnDef::new(Replies::Content).text().not_null())
                    .col(ColumnDef::new(Replies::Owner).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Replies::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Replies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_replies_comment_id")
                            .from(Replies::Table, Replies::CommentId)
                            .to(Comments::Table, Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_replies_thread_id")
                            .from(Replies::Table, Replies::ThreadId)
                            .to(Threads::Table, Threads::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_replies_owner")
                            .from(Replies::Table, Replies::Owner)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_replies_thread_id_created_at")
                    .table(Replies::Table)
                    .col(Replies::ThreadId)
                    .col(Replies::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_replies_thread_id_created_at")
                    .table(Replies::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Replies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Replies {
    Table,
    Id,
    CommentId,
    ThreadId,
    Content,
    Owner,
    IsDeleted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Threads {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

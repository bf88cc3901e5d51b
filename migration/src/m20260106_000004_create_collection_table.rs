use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(pk_uuid(Collection::Id))
                    .col(uuid(Collection::UserId))
                    .col(string(Collection::Name))
                    .col(string(Collection::Description))
                    .col(string(Collection::Visibility))
                    .col(
                        timestamp(Collection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Collection::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_user_id")
                            .from(Collection::Table, Collection::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Collection {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Visibility,
    CreatedAt,
    UpdatedAt,
}

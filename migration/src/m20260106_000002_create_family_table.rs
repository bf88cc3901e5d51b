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
                    .table(Family::Table)
                    .if_not_exists()
                    .col(pk_uuid(Family::Id))
                    .col(uuid(Family::UserId))
                    .col(string(Family::Name))
                    .col(json(Family::Abilities))
                    .col(string(Family::Visibility))
                    .col(
                        timestamp(Family::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Family::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_family_user_id")
                            .from(Family::Table, Family::UserId)
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
            .drop_table(Table::drop().table(Family::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Family {
    Table,
    Id,
    UserId,
    Name,
    Abilities,
    Visibility,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000001_create_user_table::User, m20260106_000002_create_family_table::Family,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Monster::Table)
                    .if_not_exists()
                    .col(pk_uuid(Monster::Id))
                    .col(uuid(Monster::UserId))
                    .col(uuid_null(Monster::FamilyId))
                    .col(string(Monster::Name))
                    .col(string(Monster::Level))
                    .col(integer(Monster::Hp))
                    .col(string(Monster::Armor))
                    .col(string(Monster::Size))
                    .col(integer(Monster::Speed))
                    .col(integer(Monster::Fly))
                    .col(integer(Monster::Swim))
                    .col(json(Monster::Actions))
                    .col(json(Monster::Abilities))
                    .col(boolean(Monster::Legendary))
                    .col(string(Monster::Kind))
                    .col(string(Monster::Bloodied))
                    .col(string(Monster::LastStand))
                    .col(json(Monster::Saves))
                    .col(string(Monster::Visibility))
                    .col(
                        timestamp(Monster::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Monster::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monster_user_id")
                            .from(Monster::Table, Monster::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monster_family_id")
                            .from(Monster::Table, Monster::FamilyId)
                            .to(Family::Table, Family::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Monster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Monster {
    Table,
    Id,
    UserId,
    FamilyId,
    Name,
    Level,
    Hp,
    Armor,
    Size,
    Speed,
    Fly,
    Swim,
    Actions,
    Abilities,
    Legendary,
    Kind,
    Bloodied,
    LastStand,
    Saves,
    Visibility,
    CreatedAt,
    UpdatedAt,
}

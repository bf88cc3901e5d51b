use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260106_000003_create_monster_table::Monster,
    m20260106_000004_create_collection_table::Collection,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionMonster::Table)
                    .if_not_exists()
                    .col(uuid(CollectionMonster::CollectionId))
                    .col(uuid(CollectionMonster::MonsterId))
                    .primary_key(
                        Index::create()
                            .col(CollectionMonster::CollectionId)
                            .col(CollectionMonster::MonsterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_monster_collection_id")
                            .from(CollectionMonster::Table, CollectionMonster::CollectionId)
                            .to(Collection::Table, Collection::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_monster_monster_id")
                            .from(CollectionMonster::Table, CollectionMonster::MonsterId)
                            .to(Monster::Table, Monster::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionMonster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CollectionMonster {
    Table,
    CollectionId,
    MonsterId,
}

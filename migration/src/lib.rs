pub use sea_orm_migration::prelude::*;

mod m20260106_000001_create_user_table;
mod m20260106_000002_create_family_table;
mod m20260106_000003_create_monster_table;
mod m20260106_000004_create_collection_table;
mod m20260106_000005_create_collection_monster_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260106_000001_create_user_table::Migration),
            Box::new(m20260106_000002_create_family_table::Migration),
            Box::new(m20260106_000003_create_monster_table::Migration),
            Box::new(m20260106_000004_create_collection_table::Migration),
            Box::new(m20260106_000005_create_collection_monster_table::Migration),
        ]
    }
}

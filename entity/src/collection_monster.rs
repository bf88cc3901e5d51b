use sea_orm::entity::prelude::*;

/// Collection membership join table. The composite primary key keeps
/// membership a set: a monster appears at most once per collection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collection_monster")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub monster_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collection::Entity",
        from = "Column::CollectionId",
        to = "super::collection::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Collection,
    #[sea_orm(
        belongs_to = "super::monster::Entity",
        from = "Column::MonsterId",
        to = "super::monster::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Monster,
}

impl Related<super::collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collection.def()
    }
}

impl Related<super::monster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Monster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

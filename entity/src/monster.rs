use sea_orm::entity::prelude::*;

/// A monster stat block.
///
/// `armor`, `size`, and `visibility` are stored as plain strings and mapped to
/// domain enums at the data boundary so that an unrecognized stored value can
/// be reported instead of crashing. `actions`, `abilities`, and `saves` are
/// JSON arrays whose entries are decoded independently.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "monster")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub family_id: Option<Uuid>,
    pub name: String,
    pub level: String,
    pub hp: i32,
    pub armor: String,
    pub size: String,
    pub speed: i32,
    pub fly: i32,
    pub swim: i32,
    pub actions: Json,
    pub abilities: Json,
    pub legendary: bool,
    pub kind: String,
    pub bloodied: String,
    pub last_stand: String,
    pub saves: Json,
    pub visibility: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::family::Entity",
        from = "Column::FamilyId",
        to = "super::family::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Family,
    #[sea_orm(has_many = "super::collection_monster::Entity")]
    CollectionMonster,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Family.def()
    }
}

impl Related<super::collection_monster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectionMonster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Monster data repository for database operations.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::server::{
    data::MonsterStore,
    error::AppError,
    model::monster::{
        encode_blob_list, saves_to_list, CreateMonsterParams, Monster, UpdateMonsterParams,
    },
};

/// Repository providing database operations for monsters.
pub struct MonsterRepository {
    db: DatabaseConnection,
}

impl MonsterRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Maps entity rows to domain monsters, batch-loading the referenced
    /// families in one query.
    pub(crate) async fn with_families(
        &self,
        rows: Vec<entity::monster::Model>,
    ) -> Result<Vec<Monster>, AppError> {
        let family_ids: HashSet<Uuid> = rows.iter().filter_map(|m| m.family_id).collect();

        let families: HashMap<Uuid, entity::family::Model> = if family_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Family::find()
                .filter(entity::family::Column::Id.is_in(family_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|f| (f.id, f))
                .collect()
        };

        rows.into_iter()
            .map(|row| {
                let family = row.family_id.and_then(|id| families.get(&id));
                Monster::from_entity(row, family).map_err(Into::into)
            })
            .collect()
    }

    async fn get_entity_with_family(
        &self,
        row: entity::monster::Model,
    ) -> Result<Monster, AppError> {
        let family = match row.family_id {
            Some(family_id) => {
                entity::prelude::Family::find_by_id(family_id)
                    .one(&self.db)
                    .await?
            }
            None => None,
        };

        Ok(Monster::from_entity(row, family.as_ref())?)
    }
}

#[async_trait]
impl MonsterStore for MonsterRepository {
    /// Creates a monster owned by `params.creator_id`.
    ///
    /// Actions, abilities, and the split saves list are encoded into the
    /// stored blob format; the armor/size/visibility enums are written with
    /// their canonical tokens.
    async fn create(&self, params: CreateMonsterParams) -> Result<Monster, AppError> {
        let now = Utc::now();
        let row = entity::monster::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.creator_id),
            family_id: ActiveValue::Set(params.family_id),
            name: ActiveValue::Set(params.name),
            level: ActiveValue::Set(params.level),
            hp: ActiveValue::Set(params.hp),
            armor: ActiveValue::Set(params.armor.as_str().to_string()),
            size: ActiveValue::Set(params.size.as_str().to_string()),
            speed: ActiveValue::Set(params.speed),
            fly: ActiveValue::Set(params.fly),
            swim: ActiveValue::Set(params.swim),
            actions: ActiveValue::Set(encode_blob_list(&params.actions)),
            abilities: ActiveValue::Set(encode_blob_list(&params.abilities)),
            legendary: ActiveValue::Set(params.legendary),
            kind: ActiveValue::Set(params.kind),
            bloodied: ActiveValue::Set(params.bloodied),
            last_stand: ActiveValue::Set(params.last_stand),
            saves: ActiveValue::Set(encode_blob_list(&saves_to_list(&params.saves))),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&self.db)
        .await?;

        self.get_entity_with_family(row).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Monster>, AppError> {
        let Some(row) = entity::prelude::Monster::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        self.get_entity_with_family(row).await.map(Some)
    }

    async fn list_public(&self) -> Result<Vec<Monster>, AppError> {
        let rows = entity::prelude::Monster::find()
            .filter(entity::monster::Column::Visibility.eq("public"))
            .order_by_asc(entity::monster::Column::Name)
            .all(&self.db)
            .await?;

        self.with_families(rows).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Monster>, AppError> {
        let rows = entity::prelude::Monster::find()
            .filter(entity::monster::Column::UserId.eq(user_id))
            .order_by_asc(entity::monster::Column::Name)
            .all(&self.db)
            .await?;

        self.with_families(rows).await
    }

    async fn list_in_collection(&self, collection_id: Uuid) -> Result<Vec<Monster>, AppError> {
        let rows = entity::prelude::Monster::find()
            .join(
                JoinType::InnerJoin,
                entity::monster::Relation::CollectionMonster.def(),
            )
            .filter(entity::collection_monster::Column::CollectionId.eq(collection_id))
            .order_by_asc(entity::monster::Column::Name)
            .all(&self.db)
            .await?;

        self.with_families(rows).await
    }

    /// Replaces a monster's fields. The owner and creation timestamp are left
    /// untouched.
    async fn update(&self, params: UpdateMonsterParams) -> Result<Monster, AppError> {
        let row = entity::monster::ActiveModel {
            id: ActiveValue::Set(params.id),
            family_id: ActiveValue::Set(params.family_id),
            name: ActiveValue::Set(params.name),
            level: ActiveValue::Set(params.level),
            hp: ActiveValue::Set(params.hp),
            armor: ActiveValue::Set(params.armor.as_str().to_string()),
            size: ActiveValue::Set(params.size.as_str().to_string()),
            speed: ActiveValue::Set(params.speed),
            fly: ActiveValue::Set(params.fly),
            swim: ActiveValue::Set(params.swim),
            actions: ActiveValue::Set(encode_blob_list(&params.actions)),
            abilities: ActiveValue::Set(encode_blob_list(&params.abilities)),
            legendary: ActiveValue::Set(params.legendary),
            kind: ActiveValue::Set(params.kind),
            bloodied: ActiveValue::Set(params.bloodied),
            last_stand: ActiveValue::Set(params.last_stand),
            saves: ActiveValue::Set(encode_blob_list(&saves_to_list(&params.saves))),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        self.get_entity_with_family(row).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        entity::prelude::Monster::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn count_in_family(&self, family_id: Uuid) -> Result<u64, AppError> {
        let count = entity::prelude::Monster::find()
            .filter(entity::monster::Column::FamilyId.eq(family_id))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn find_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<Uuid> = entity::prelude::Monster::find()
            .select_only()
            .column(entity::monster::Column::Id)
            .filter(entity::monster::Column::Id.is_in(ids.to_vec()))
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(existing)
    }
}

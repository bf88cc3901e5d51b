//! Collection data repository for database operations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::server::{
    data::{CollectionStore, MonsterStore},
    error::AppError,
    model::{
        collection::{
            Collection, CollectionOverview, CreateCollectionParams, UpdateCollectionParams,
        },
        monster::Monster,
        user::User,
    },
};

use super::monster::MonsterRepository;

/// Repository providing database operations for collections and their
/// membership association.
pub struct CollectionRepository {
    db: DatabaseConnection,
    monsters: MonsterRepository,
}

impl CollectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            monsters: MonsterRepository::new(db.clone()),
            db,
        }
    }

    /// Batch-loads legendary/standard member counts for the given collection
    /// ids in one joined query.
    async fn member_counts(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, (u64, u64)>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, bool)> = entity::prelude::CollectionMonster::find()
            .select_only()
            .column(entity::collection_monster::Column::CollectionId)
            .column(entity::monster::Column::Legendary)
            .join(
                JoinType::InnerJoin,
                entity::collection_monster::Relation::Monster.def(),
            )
            .filter(entity::collection_monster::Column::CollectionId.is_in(ids.to_vec()))
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut counts: HashMap<Uuid, (u64, u64)> = HashMap::new();
        for (collection_id, legendary) in rows {
            let entry = counts.entry(collection_id).or_default();
            if legendary {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }

        Ok(counts)
    }

    async fn creator(&self, user_id: Uuid) -> Result<User, AppError> {
        let row = entity::prelude::User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("collection creator {user_id} missing"))
            })?;

        Ok(User::from_entity(row))
    }

    /// Builds an overview for a freshly written row, fetching the creator and
    /// derived counts.
    async fn overview(
        &self,
        row: entity::collection::Model,
    ) -> Result<CollectionOverview, AppError> {
        let creator = self.creator(row.user_id).await?;
        let counts = self.member_counts(&[row.id]).await?;
        let (legendary, standard) = counts.get(&row.id).copied().unwrap_or((0, 0));

        Ok(CollectionOverview::from_entity(
            row, creator, legendary, standard,
        )?)
    }

    async fn overviews(
        &self,
        rows: Vec<entity::collection::Model>,
    ) -> Result<Vec<CollectionOverview>, AppError> {
        let ids: Vec<Uuid> = rows.iter().map(|c| c.id).collect();
        let counts = self.member_counts(&ids).await?;

        let creator_ids: Vec<Uuid> = rows.iter().map(|c| c.user_id).collect();
        let creators: HashMap<Uuid, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(creator_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from_entity(u)))
            .collect();

        rows.into_iter()
            .map(|row| {
                let creator = creators.get(&row.user_id).cloned().ok_or_else(|| {
                    AppError::InternalError(format!("collection creator {} missing", row.user_id))
                })?;
                let (legendary, standard) = counts.get(&row.id).copied().unwrap_or((0, 0));
                CollectionOverview::from_entity(row, creator, legendary, standard)
                    .map_err(Into::into)
            })
            .collect()
    }
}

#[async_trait]
impl CollectionStore for CollectionRepository {
    async fn create(&self, params: CreateCollectionParams) -> Result<CollectionOverview, AppError> {
        let now = Utc::now();
        let row = entity::collection::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.creator_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&self.db)
        .await?;

        self.overview(row).await
    }

    /// Fetches a collection and its member list.
    ///
    /// The two reads are independent and run in parallel; either failure
    /// aborts the combined operation.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Collection>, AppError> {
        let (row, monsters): (Option<entity::collection::Model>, Vec<Monster>) = tokio::try_join!(
            async {
                entity::prelude::Collection::find_by_id(id)
                    .one(&self.db)
                    .await
                    .map_err(AppError::from)
            },
            self.monsters.list_in_collection(id),
        )?;

        let Some(row) = row else {
            return Ok(None);
        };

        let creator = self.creator(row.user_id).await?;
        let legendary = monsters.iter().filter(|m| m.legendary).count() as u64;
        let standard = monsters.len() as u64 - legendary;

        Ok(Some(Collection {
            overview: CollectionOverview::from_entity(row, creator, legendary, standard)?,
            monsters,
        }))
    }

    async fn list_public(&self) -> Result<Vec<CollectionOverview>, AppError> {
        let rows = entity::prelude::Collection::find()
            .filter(entity::collection::Column::Visibility.eq("public"))
            .order_by_desc(entity::collection::Column::CreatedAt)
            .all(&self.db)
            .await?;

        self.overviews(rows).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<CollectionOverview>, AppError> {
        let rows = entity::prelude::Collection::find()
            .filter(entity::collection::Column::UserId.eq(user_id))
            .order_by_desc(entity::collection::Column::CreatedAt)
            .all(&self.db)
            .await?;

        self.overviews(rows).await
    }

    async fn update(&self, params: UpdateCollectionParams) -> Result<CollectionOverview, AppError> {
        let row = entity::collection::ActiveModel {
            id: ActiveValue::Set(params.id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        self.overview(row).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        entity::prelude::Collection::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn monster_ids(&self, id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<Uuid> = entity::prelude::CollectionMonster::find()
            .select_only()
            .column(entity::collection_monster::Column::MonsterId)
            .filter(entity::collection_monster::Column::CollectionId.eq(id))
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(ids)
    }

    async fn add_monster(&self, id: Uuid, monster_id: Uuid) -> Result<(), AppError> {
        entity::collection_monster::ActiveModel {
            collection_id: ActiveValue::Set(id),
            monster_id: ActiveValue::Set(monster_id),
        }
        .insert(&self.db)
        .await?;
        Ok(())
    }

    async fn remove_monster(&self, id: Uuid, monster_id: Uuid) -> Result<(), AppError> {
        entity::prelude::CollectionMonster::delete_many()
            .filter(entity::collection_monster::Column::CollectionId.eq(id))
            .filter(entity::collection_monster::Column::MonsterId.eq(monster_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

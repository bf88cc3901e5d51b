//! Family data repository for database operations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    data::FamilyStore,
    error::AppError,
    model::{
        family::{CreateFamilyParams, Family, UpdateFamilyParams},
        monster::encode_blob_list,
    },
};

/// Repository providing database operations for families.
///
/// Every read attaches the derived monster count, which drives both the
/// JSON views and the cannot-delete-while-referenced invariant.
pub struct FamilyRepository {
    db: DatabaseConnection,
}

impl FamilyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Batch-loads monster counts for the given family ids in one grouped query.
    async fn monster_counts(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, u64>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(Option<Uuid>, i64)> = entity::prelude::Monster::find()
            .select_only()
            .column(entity::monster::Column::FamilyId)
            .column_as(entity::monster::Column::Id.count(), "count")
            .filter(entity::monster::Column::FamilyId.is_in(ids.to_vec()))
            .group_by(entity::monster::Column::FamilyId)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(counts
            .into_iter()
            .filter_map(|(id, count)| id.map(|id| (id, count as u64)))
            .collect())
    }

    async fn with_counts(
        &self,
        rows: Vec<entity::family::Model>,
    ) -> Result<Vec<Family>, AppError> {
        let ids: Vec<Uuid> = rows.iter().map(|f| f.id).collect();
        let counts = self.monster_counts(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let count = counts.get(&row.id).copied().unwrap_or(0);
                Family::from_entity(row, count).map_err(Into::into)
            })
            .collect()
    }
}

#[async_trait]
impl FamilyStore for FamilyRepository {
    async fn create(&self, params: CreateFamilyParams) -> Result<Family, AppError> {
        let now = Utc::now();
        let row = entity::family::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.creator_id),
            name: ActiveValue::Set(params.name),
            abilities: ActiveValue::Set(encode_blob_list(&params.abilities)),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&self.db)
        .await?;

        // No monster can reference a family that did not exist yet.
        Ok(Family::from_entity(row, 0)?)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Family>, AppError> {
        let Some(row) = entity::prelude::Family::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let count = entity::prelude::Monster::find()
            .filter(entity::monster::Column::FamilyId.eq(id))
            .count(&self.db)
            .await?;

        Ok(Some(Family::from_entity(row, count)?))
    }

    async fn list_public(&self) -> Result<Vec<Family>, AppError> {
        let rows = entity::prelude::Family::find()
            .filter(entity::family::Column::Visibility.eq("public"))
            .order_by_asc(entity::family::Column::Name)
            .all(&self.db)
            .await?;

        self.with_counts(rows).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Family>, AppError> {
        let rows = entity::prelude::Family::find()
            .filter(entity::family::Column::UserId.eq(user_id))
            .order_by_asc(entity::family::Column::Name)
            .all(&self.db)
            .await?;

        self.with_counts(rows).await
    }

    async fn update(&self, params: UpdateFamilyParams) -> Result<Family, AppError> {
        let row = entity::family::ActiveModel {
            id: ActiveValue::Set(params.id),
            name: ActiveValue::Set(params.name),
            abilities: ActiveValue::Set(encode_blob_list(&params.abilities)),
            visibility: ActiveValue::Set(params.visibility.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        let count = entity::prelude::Monster::find()
            .filter(entity::monster::Column::FamilyId.eq(params.id))
            .count(&self.db)
            .await?;

        Ok(Family::from_entity(row, count)?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        entity::prelude::Family::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

//! Collection factory for creating test collection entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test collections with customizable fields.
pub struct CollectionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    name: String,
    description: String,
    visibility: String,
}

impl<'a> CollectionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Collection {}", id),
            description: String::new(),
            visibility: "private".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Builds and inserts the collection entity into the database.
    pub async fn build(self) -> Result<entity::collection::Model, DbErr> {
        let now = Utc::now();
        entity::collection::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            visibility: ActiveValue::Set(self.visibility),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private collection with default values for the given owner.
pub async fn create_collection(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::collection::Model, DbErr> {
    CollectionFactory::new(db, user_id).build().await
}

/// Adds a monster to a collection directly through the join table.
pub async fn add_monster_to_collection(
    db: &DatabaseConnection,
    collection_id: Uuid,
    monster_id: Uuid,
) -> Result<(), DbErr> {
    entity::collection_monster::ActiveModel {
        collection_id: ActiveValue::Set(collection_id),
        monster_id: ActiveValue::Set(monster_id),
    }
    .insert(db)
    .await?;

    Ok(())
}

//! Family factory for creating test family entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

/// Factory for creating test families with customizable fields.
pub struct FamilyFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    name: String,
    abilities: serde_json::Value,
    visibility: String,
}

impl<'a> FamilyFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Family {}", id),
            abilities: json!([]),
            visibility: "private".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Raw JSON for the stored abilities list.
    pub fn abilities_json(mut self, abilities: serde_json::Value) -> Self {
        self.abilities = abilities;
        self
    }

    /// Builds and inserts the family entity into the database.
    pub async fn build(self) -> Result<entity::family::Model, DbErr> {
        let now = Utc::now();
        entity::family::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            abilities: ActiveValue::Set(self.abilities),
            visibility: ActiveValue::Set(self.visibility),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private family with default values for the given owner.
pub async fn create_family(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::family::Model, DbErr> {
    FamilyFactory::new(db, user_id).build().await
}

//! Monster factory for creating test monster entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

/// Factory for creating test monsters with customizable fields.
///
/// Defaults to a plain private medium-sized monster with empty action and
/// ability lists owned by the given user.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::monster::MonsterFactory;
///
/// let monster = MonsterFactory::new(&db, user.id)
///     .name("Goblin")
///     .visibility("public")
///     .build()
///     .await?;
/// ```
pub struct MonsterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    family_id: Option<Uuid>,
    name: String,
    level: String,
    hp: i32,
    armor: String,
    size: String,
    actions: serde_json::Value,
    abilities: serde_json::Value,
    legendary: bool,
    saves: serde_json::Value,
    visibility: String,
}

impl<'a> MonsterFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            family_id: None,
            name: format!("Monster {}", id),
            level: "1".to_string(),
            hp: 10,
            armor: "none".to_string(),
            size: "medium".to_string(),
            actions: json!([]),
            abilities: json!([]),
            legendary: false,
            saves: json!([]),
            visibility: "private".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn armor(mut self, armor: impl Into<String>) -> Self {
        self.armor = armor.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn family_id(mut self, family_id: Uuid) -> Self {
        self.family_id = Some(family_id);
        self
    }

    pub fn legendary(mut self, legendary: bool) -> Self {
        self.legendary = legendary;
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Raw JSON for the stored actions list, for corruption scenarios.
    pub fn actions_json(mut self, actions: serde_json::Value) -> Self {
        self.actions = actions;
        self
    }

    /// Raw JSON for the stored saves list.
    pub fn saves_json(mut self, saves: serde_json::Value) -> Self {
        self.saves = saves;
        self
    }

    /// Builds and inserts the monster entity into the database.
    pub async fn build(self) -> Result<entity::monster::Model, DbErr> {
        let now = Utc::now();
        entity::monster::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            family_id: ActiveValue::Set(self.family_id),
            name: ActiveValue::Set(self.name),
            level: ActiveValue::Set(self.level),
            hp: ActiveValue::Set(self.hp),
            armor: ActiveValue::Set(self.armor),
            size: ActiveValue::Set(self.size),
            speed: ActiveValue::Set(6),
            fly: ActiveValue::Set(0),
            swim: ActiveValue::Set(0),
            actions: ActiveValue::Set(self.actions),
            abilities: ActiveValue::Set(self.abilities),
            legendary: ActiveValue::Set(self.legendary),
            kind: ActiveValue::Set(String::new()),
            bloodied: ActiveValue::Set(String::new()),
            last_stand: ActiveValue::Set(String::new()),
            saves: ActiveValue::Set(self.saves),
            visibility: ActiveValue::Set(self.visibility),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private monster with default values for the given owner.
pub async fn create_monster(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::monster::Model, DbErr> {
    MonsterFactory::new(db, user_id).build().await
}

//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .discord_id("123456789")
///     .username("CustomUser")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    username: String,
    avatar: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: unique counter value
    /// - username: `"User {id}"`
    /// - avatar: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            username: format!("User {}", id),
            avatar: None,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            discord_id: ActiveValue::Set(self.discord_id),
            username: ActiveValue::Set(self.username),
            avatar: ActiveValue::Set(self.avatar),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

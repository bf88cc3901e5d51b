//! User data repository for database operations.
//!
//! Handles user creation and lookup with conversion between entity models and
//! domain models at the infrastructure boundary. Users are upserted on every
//! successful login, keyed by their Discord id.

use async_trait::async_trait;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::{
    data::UserStore,
    error::AppError,
    model::user::{UpsertUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool (cheap to clone)
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// Upserts a user from login parameters.
    ///
    /// Inserts a new user or refreshes an existing user's name and avatar.
    /// The conflict target is the Discord id, so repeated logins keep the
    /// same internal id.
    ///
    /// # Returns
    /// - `Ok(User)` - The created or refreshed user
    /// - `Err(AppError)` - Database error during insert or update
    async fn upsert(&self, params: UpsertUserParams) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            discord_id: ActiveValue::Set(params.discord_id),
            username: ActiveValue::Set(params.username),
            avatar: ActiveValue::Set(params.avatar),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Username,
                    entity::user::Column::Avatar,
                ])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their internal id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their Discord id.
    async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(&self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}

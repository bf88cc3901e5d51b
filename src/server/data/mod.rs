//! Persistence gateway: store traits and their implementations.
//!
//! Each domain aggregate is reached through a store trait so the service layer
//! never sees SeaORM types. Two implementations exist per trait: the
//! SQLite-backed repositories in this module's entity files, and the guarded
//! in-memory doubles in [`memory`] used by service-level tests. Repositories
//! convert entity models to domain models at this boundary; unmappable stored
//! data surfaces as `DataError` rather than crashing.

pub mod collection;
pub mod family;
pub mod monster;
pub mod user;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::{
        collection::{
            Collection, CollectionOverview, CreateCollectionParams, UpdateCollectionParams,
        },
        family::{CreateFamilyParams, Family, UpdateFamilyParams},
        monster::{CreateMonsterParams, Monster, UpdateMonsterParams},
        user::{UpsertUserParams, User},
    },
};

/// Storage operations for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts or refreshes a user record, keyed by Discord id.
    async fn upsert(&self, params: UpsertUserParams) -> Result<User, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<User>, AppError>;
}

/// Storage operations for monsters.
#[async_trait]
pub trait MonsterStore: Send + Sync {
    async fn create(&self, params: CreateMonsterParams) -> Result<Monster, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Monster>, AppError>;

    /// Lists publicly visible monsters, ordered by name.
    async fn list_public(&self) -> Result<Vec<Monster>, AppError>;

    /// Lists every monster owned by `user_id` regardless of visibility.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Monster>, AppError>;

    /// Lists the members of a collection, ordered by name.
    async fn list_in_collection(&self, collection_id: Uuid) -> Result<Vec<Monster>, AppError>;

    /// Replaces a monster's fields.
    async fn update(&self, params: UpdateMonsterParams) -> Result<Monster, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Number of monsters referencing the given family.
    async fn count_in_family(&self, family_id: Uuid) -> Result<u64, AppError>;

    /// Returns the subset of `ids` that exist, in no particular order.
    async fn find_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, AppError>;
}

/// Storage operations for families.
#[async_trait]
pub trait FamilyStore: Send + Sync {
    async fn create(&self, params: CreateFamilyParams) -> Result<Family, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Family>, AppError>;

    /// Lists publicly visible families (secret ones excluded), ordered by name.
    async fn list_public(&self) -> Result<Vec<Family>, AppError>;

    /// Lists every family owned by `user_id` regardless of visibility.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Family>, AppError>;

    async fn update(&self, params: UpdateFamilyParams) -> Result<Family, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

/// Storage operations for collections and their membership association.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn create(&self, params: CreateCollectionParams) -> Result<CollectionOverview, AppError>;

    /// Fetches a collection with its member list materialized. The collection
    /// row and the member list are read in parallel.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Collection>, AppError>;

    /// Lists publicly visible collections (secret ones excluded), newest first.
    async fn list_public(&self) -> Result<Vec<CollectionOverview>, AppError>;

    /// Lists every collection owned by `user_id` regardless of visibility.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<CollectionOverview>, AppError>;

    async fn update(&self, params: UpdateCollectionParams) -> Result<CollectionOverview, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Ids of the collection's current members.
    async fn monster_ids(&self, id: Uuid) -> Result<Vec<Uuid>, AppError>;

    async fn add_monster(&self, id: Uuid, monster_id: Uuid) -> Result<(), AppError>;

    async fn remove_monster(&self, id: Uuid, monster_id: Uuid) -> Result<(), AppError>;
}

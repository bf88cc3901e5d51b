use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    error::data::DataError,
    model::{family::ShareVisibility, monster::Monster, user::User},
};

/// A collection without its member list, as returned by listing endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOverview {
    pub id: Uuid,
    pub creator: User,
    pub name: String,
    pub description: String,
    pub visibility: ShareVisibility,
    /// Derived count of legendary members.
    pub legendary_count: u64,
    /// Derived count of non-legendary members.
    pub standard_count: u64,
    pub created_at: DateTime<Utc>,
}

impl CollectionOverview {
    /// Converts an entity model, its creator, and derived member counts into
    /// the domain model.
    pub fn from_entity(
        entity: entity::collection::Model,
        creator: User,
        legendary_count: u64,
        standard_count: u64,
    ) -> Result<Self, DataError> {
        let visibility = ShareVisibility::parse(&entity.visibility).ok_or_else(|| {
            DataError::UnknownEnumValue {
                entity: "collection",
                field: "visibility",
                id: entity.id,
                value: entity.visibility.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            creator,
            name: entity.name,
            description: entity.description,
            visibility,
            legendary_count,
            standard_count,
            created_at: entity.created_at,
        })
    }

    /// Whether `requester` may read this collection.
    ///
    /// Secret collections are readable by anyone fetching them directly by
    /// id; listing endpoints are responsible for excluding them.
    pub fn can_read(&self, requester: Option<&User>) -> bool {
        match self.visibility {
            ShareVisibility::Public | ShareVisibility::Secret => true,
            ShareVisibility::Private => requester.is_some_and(|u| u.id == self.creator.id),
        }
    }

    /// Whether `requester` may mutate or delete this collection.
    pub fn can_write(&self, requester: &User) -> bool {
        requester.id == self.creator.id
    }
}

/// A collection with its ordered member list materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub overview: CollectionOverview,
    pub monsters: Vec<Monster>,
}

/// Parameters for creating a new collection.
#[derive(Debug, Clone)]
pub struct CreateCollectionParams {
    pub creator_id: Uuid,
    pub name: String,
    pub description: String,
    pub visibility: ShareVisibility,
}

/// Parameters for updating a collection's metadata. Membership changes go
/// through the reconciliation path instead.
#[derive(Debug, Clone)]
pub struct UpdateCollectionParams {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub visibility: ShareVisibility,
}

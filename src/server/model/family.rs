use uuid::Uuid;

use crate::server::{
    error::data::DataError,
    model::{
        monster::{decode_blob_list, Ability},
        user::User,
    },
};

/// Visibility states for families and collections.
///
/// `secret` sits between public and private: anyone holding the direct id can
/// fetch the item, but it never appears in public listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareVisibility {
    Public,
    Private,
    Secret,
}

impl ShareVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Secret => "secret",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "secret" => Some(Self::Secret),
            _ => None,
        }
    }
}

/// A named, reusable bundle of abilities shared by the monsters that
/// reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct Family {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub name: String,
    pub abilities: Vec<Ability>,
    pub visibility: ShareVisibility,
    /// Number of monsters currently referencing this family. A family with a
    /// nonzero count cannot be deleted.
    pub monster_count: u64,
}

impl Family {
    /// Converts an entity model and its derived monster count into the domain model.
    pub fn from_entity(
        entity: entity::family::Model,
        monster_count: u64,
    ) -> Result<Self, DataError> {
        let visibility = ShareVisibility::parse(&entity.visibility).ok_or_else(|| {
            DataError::UnknownEnumValue {
                entity: "family",
                field: "visibility",
                id: entity.id,
                value: entity.visibility.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            creator_id: entity.user_id,
            name: entity.name,
            abilities: decode_blob_list::<Ability>(
                &entity.abilities,
                "family",
                "abilities",
                entity.id,
            )?,
            visibility,
            monster_count,
        })
    }

    /// Whether `requester` may read this family.
    ///
    /// Secret families are readable by anyone fetching them directly by id;
    /// listing endpoints are responsible for excluding them.
    pub fn can_read(&self, requester: Option<&User>) -> bool {
        match self.visibility {
            ShareVisibility::Public | ShareVisibility::Secret => true,
            ShareVisibility::Private => requester.is_some_and(|u| u.id == self.creator_id),
        }
    }

    /// Whether `requester` may mutate or delete this family.
    pub fn can_write(&self, requester: &User) -> bool {
        requester.id == self.creator_id
    }
}

/// Parameters for creating a new family.
#[derive(Debug, Clone)]
pub struct CreateFamilyParams {
    pub creator_id: Uuid,
    pub name: String,
    pub abilities: Vec<Ability>,
    pub visibility: ShareVisibility,
}

/// Parameters for replacing an existing family's fields.
#[derive(Debug, Clone)]
pub struct UpdateFamilyParams {
    pub id: Uuid,
    pub name: String,
    pub abilities: Vec<Ability>,
    pub visibility: ShareVisibility,
}

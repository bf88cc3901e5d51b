use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    model::{family::parse_visibility, monster::MonsterDto, user::UserDto},
    server::{
        error::AppError,
        model::collection::{
            Collection, CollectionOverview, CreateCollectionParams, UpdateCollectionParams,
        },
    },
};

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOverviewDto {
    pub id: Uuid,
    pub creator: UserDto,
    pub name: String,
    pub description: String,
    pub visibility: String,
    pub legendary_count: u64,
    pub standard_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CollectionDto {
    #[serde(flatten)]
    pub overview: CollectionOverviewDto,
    pub monsters: Vec<MonsterDto>,
}

/// List response wrapper.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CollectionsDto {
    pub collections: Vec<CollectionOverviewDto>,
}

/// Request body for creating or updating a collection's metadata.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUpsertDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub visibility: String,
}

impl CollectionOverviewDto {
    pub fn from_overview(overview: CollectionOverview) -> Self {
        Self {
            id: overview.id,
            creator: UserDto::from_user(overview.creator),
            name: overview.name,
            description: overview.description,
            visibility: overview.visibility.as_str().to_string(),
            legendary_count: overview.legendary_count,
            standard_count: overview.standard_count,
            created_at: overview.created_at,
        }
    }
}

impl CollectionDto {
    pub fn from_collection(collection: Collection) -> Self {
        Self {
            overview: CollectionOverviewDto::from_overview(collection.overview),
            monsters: collection
                .monsters
                .into_iter()
                .map(MonsterDto::from_monster)
                .collect(),
        }
    }
}

impl CollectionUpsertDto {
    pub fn into_create_params(self, creator_id: Uuid) -> Result<CreateCollectionParams, AppError> {
        Ok(CreateCollectionParams {
            creator_id,
            name: self.name,
            description: self.description,
            visibility: parse_visibility(&self.visibility)?,
        })
    }

    pub fn into_update_params(self, id: Uuid) -> Result<UpdateCollectionParams, AppError> {
        Ok(UpdateCollectionParams {
            id,
            name: self.name,
            description: self.description,
            visibility: parse_visibility(&self.visibility)?,
        })
    }
}

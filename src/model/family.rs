use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    model::monster::AbilityDto,
    server::{
        error::AppError,
        model::family::{CreateFamilyParams, Family, ShareVisibility, UpdateFamilyParams},
    },
};

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyDto {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub name: String,
    pub abilities: Vec<AbilityDto>,
    pub visibility: String,
    pub monster_count: u64,
}

/// List response wrapper.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FamiliesDto {
    pub families: Vec<FamilyDto>,
}

/// Request body for creating or replacing a family.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyUpsertDto {
    pub name: String,
    #[serde(default)]
    pub abilities: Vec<AbilityDto>,
    pub visibility: String,
}

impl FamilyDto {
    pub fn from_family(family: Family) -> Self {
        Self {
            id: family.id,
            creator_id: family.creator_id,
            name: family.name,
            abilities: family
                .abilities
                .into_iter()
                .map(AbilityDto::from_ability)
                .collect(),
            visibility: family.visibility.as_str().to_string(),
            monster_count: family.monster_count,
        }
    }
}

impl FamilyUpsertDto {
    pub fn into_create_params(self, creator_id: Uuid) -> Result<CreateFamilyParams, AppError> {
        let visibility = parse_visibility(&self.visibility)?;

        Ok(CreateFamilyParams {
            creator_id,
            name: self.name,
            abilities: self
                .abilities
                .into_iter()
                .map(AbilityDto::into_ability)
                .collect(),
            visibility,
        })
    }

    pub fn into_update_params(self, id: Uuid) -> Result<UpdateFamilyParams, AppError> {
        let visibility = parse_visibility(&self.visibility)?;

        Ok(UpdateFamilyParams {
            id,
            name: self.name,
            abilities: self
                .abilities
                .into_iter()
                .map(AbilityDto::into_ability)
                .collect(),
            visibility,
        })
    }
}

pub(crate) fn parse_visibility(value: &str) -> Result<ShareVisibility, AppError> {
    ShareVisibility::parse(value)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown visibility '{value}'")))
}

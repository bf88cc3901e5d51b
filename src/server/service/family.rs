use std::sync::Arc;

use uuid::Uuid;

use crate::server::{
    data::FamilyStore,
    error::AppError,
    model::{
        family::{CreateFamilyParams, Family, UpdateFamilyParams},
        user::User,
    },
};

pub struct FamilyService {
    families: Arc<dyn FamilyStore>,
}

impl FamilyService {
    pub fn new(families: Arc<dyn FamilyStore>) -> Self {
        Self { families }
    }

    /// Fetches a family, enforcing the read policy.
    ///
    /// Secret families resolve for anyone holding the direct id; private
    /// families only for their creator.
    pub async fn get(&self, id: Uuid, requester: Option<&User>) -> Result<Family, AppError> {
        let family = self
            .families
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Family not found".to_string()))?;

        if !family.can_read(requester) {
            return Err(AppError::Forbidden(
                "You do not have access to this family".to_string(),
            ));
        }

        Ok(family)
    }

    /// Lists publicly visible families. Secret families never appear here.
    pub async fn list_public(&self) -> Result<Vec<Family>, AppError> {
        self.families.list_public().await
    }

    /// Lists the requester's own families regardless of visibility.
    pub async fn list_mine(&self, requester: &User) -> Result<Vec<Family>, AppError> {
        self.families.list_for_user(requester.id).await
    }

    pub async fn create(
        &self,
        requester: &User,
        mut params: CreateFamilyParams,
    ) -> Result<Family, AppError> {
        params.creator_id = requester.id;
        self.families.create(params).await
    }

    /// Replaces a family's fields. Only the creator may update.
    pub async fn update(
        &self,
        requester: &User,
        params: UpdateFamilyParams,
    ) -> Result<Family, AppError> {
        let existing = self
            .families
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Family not found".to_string()))?;

        if !existing.can_write(requester) {
            return Err(AppError::Forbidden(
                "Only the creator can update a family".to_string(),
            ));
        }

        self.families.update(params).await
    }

    /// Deletes a family. Only the creator may delete, and never while any
    /// monster still references the family.
    pub async fn delete(&self, requester: &User, id: Uuid) -> Result<(), AppError> {
        let existing = self
            .families
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Family not found".to_string()))?;

        if !existing.can_write(requester) {
            return Err(AppError::Forbidden(
                "Only the creator can delete a family".to_string(),
            ));
        }

        if existing.monster_count > 0 {
            return Err(AppError::BadRequest(
                "Family still has monsters and cannot be deleted".to_string(),
            ));
        }

        self.families.delete(id).await
    }
}

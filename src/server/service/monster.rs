use std::sync::Arc;

use uuid::Uuid;

use crate::server::{
    data::{FamilyStore, MonsterStore},
    error::AppError,
    model::{
        monster::{CreateMonsterParams, Monster, UpdateMonsterParams},
        user::User,
    },
};

pub struct MonsterService {
    monsters: Arc<dyn MonsterStore>,
    families: Arc<dyn FamilyStore>,
}

impl MonsterService {
    pub fn new(monsters: Arc<dyn MonsterStore>, families: Arc<dyn FamilyStore>) -> Self {
        Self { monsters, families }
    }

    /// Fetches a monster, enforcing the read policy.
    ///
    /// Unknown ids are `NotFound` before any access check; an existing
    /// monster the requester may not read is `Forbidden`.
    pub async fn get(&self, id: Uuid, requester: Option<&User>) -> Result<Monster, AppError> {
        let monster = self
            .monsters
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Monster not found".to_string()))?;

        if !monster.can_read(requester) {
            return Err(AppError::Forbidden(
                "You do not have access to this monster".to_string(),
            ));
        }

        Ok(monster)
    }

    /// Lists publicly visible monsters.
    pub async fn list_public(&self) -> Result<Vec<Monster>, AppError> {
        self.monsters.list_public().await
    }

    /// Lists the requester's own monsters, optionally narrowed to a set of ids.
    pub async fn list_mine(
        &self,
        requester: &User,
        ids: Option<Vec<Uuid>>,
    ) -> Result<Vec<Monster>, AppError> {
        let monsters = self.monsters.list_for_user(requester.id).await?;

        Ok(match ids {
            Some(ids) => monsters
                .into_iter()
                .filter(|m| ids.contains(&m.id))
                .collect(),
            None => monsters,
        })
    }

    /// Creates a monster owned by the requester.
    pub async fn create(
        &self,
        requester: &User,
        mut params: CreateMonsterParams,
    ) -> Result<Monster, AppError> {
        params.creator_id = requester.id;
        self.check_family(params.family_id).await?;

        self.monsters.create(params).await
    }

    /// Replaces a monster's fields. Only the creator may update.
    pub async fn update(
        &self,
        requester: &User,
        params: UpdateMonsterParams,
    ) -> Result<Monster, AppError> {
        let existing = self
            .monsters
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Monster not found".to_string()))?;

        if !existing.can_write(requester) {
            return Err(AppError::Forbidden(
                "Only the creator can update a monster".to_string(),
            ));
        }

        self.check_family(params.family_id).await?;

        self.monsters.update(params).await
    }

    /// Deletes a monster. Only the creator may delete.
    pub async fn delete(&self, requester: &User, id: Uuid) -> Result<(), AppError> {
        let existing = self
            .monsters
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Monster not found".to_string()))?;

        if !existing.can_write(requester) {
            return Err(AppError::Forbidden(
                "Only the creator can delete a monster".to_string(),
            ));
        }

        self.monsters.delete(id).await
    }

    async fn check_family(&self, family_id: Option<Uuid>) -> Result<(), AppError> {
        if let Some(family_id) = family_id {
            self.families
                .get_by_id(family_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Family not found".to_string()))?;
        }
        Ok(())
    }
}

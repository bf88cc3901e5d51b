use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::server::{
    data::{CollectionStore, MonsterStore},
    error::AppError,
    model::{
        collection::{
            Collection, CollectionOverview, CreateCollectionParams, UpdateCollectionParams,
        },
        user::User,
    },
};

pub struct CollectionService {
    collections: Arc<dyn CollectionStore>,
    monsters: Arc<dyn MonsterStore>,
}

impl CollectionService {
    pub fn new(collections: Arc<dyn CollectionStore>, monsters: Arc<dyn MonsterStore>) -> Self {
        Self {
            collections,
            monsters,
        }
    }

    /// Fetches a collection with its members, enforcing the read policy.
    ///
    /// Secret collections resolve for anyone holding the direct id; private
    /// collections only for their creator.
    pub async fn get(&self, id: Uuid, requester: Option<&User>) -> Result<Collection, AppError> {
        let collection = self
            .collections
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Collection not found".to_string()))?;

        if !collection.overview.can_read(requester) {
            return Err(AppError::Forbidden(
                "You do not have access to this collection".to_string(),
            ));
        }

        Ok(collection)
    }

    /// Lists publicly visible collections. Secret collections never appear here.
    pub async fn list_public(&self) -> Result<Vec<CollectionOverview>, AppError> {
        self.collections.list_public().await
    }

    /// Lists the requester's own collections regardless of visibility.
    pub async fn list_mine(&self, requester: &User) -> Result<Vec<CollectionOverview>, AppError> {
        self.collections.list_for_user(requester.id).await
    }

    pub async fn create(
        &self,
        requester: &User,
        mut params: CreateCollectionParams,
    ) -> Result<CollectionOverview, AppError> {
        params.creator_id = requester.id;
        self.collections.create(params).await
    }

    /// Updates a collection's metadata. Only the creator may update.
    pub async fn update(
        &self,
        requester: &User,
        params: UpdateCollectionParams,
    ) -> Result<CollectionOverview, AppError> {
        self.writable(params.id, requester).await?;
        self.collections.update(params).await
    }

    /// Deletes a collection. Only the creator may delete.
    pub async fn delete(&self, requester: &User, id: Uuid) -> Result<(), AppError> {
        self.writable(id, requester).await?;
        self.collections.delete(id).await
    }

    /// Converges a collection's membership to `desired`.
    ///
    /// Computes the add/remove deltas against current membership, validates
    /// that every monster to be added exists (a missing id aborts before any
    /// association is written), applies both batches, and returns the
    /// collection in its final state.
    pub async fn set_monsters(
        &self,
        requester: &User,
        id: Uuid,
        desired: Vec<Uuid>,
    ) -> Result<Collection, AppError> {
        self.writable(id, requester).await?;

        let current = self.collections.monster_ids(id).await?;
        let (to_add, to_remove) = reconcile(&current, &desired);

        let existing: HashSet<Uuid> = self
            .monsters
            .find_existing_ids(&to_add)
            .await?
            .into_iter()
            .collect();
        if let Some(missing) = to_add.iter().find(|id| !existing.contains(id)) {
            return Err(AppError::NotFound(format!("Monster {missing} not found")));
        }

        for monster_id in to_add {
            self.collections.add_monster(id, monster_id).await?;
        }
        for monster_id in to_remove {
            self.collections.remove_monster(id, monster_id).await?;
        }

        self.collections
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Collection not found".to_string()))
    }

    /// Confirms the collection exists and the requester owns it, in that
    /// order: unknown ids are `NotFound` before ownership is checked.
    async fn writable(&self, id: Uuid, requester: &User) -> Result<(), AppError> {
        let existing = self
            .collections
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Collection not found".to_string()))?;

        if !existing.overview.can_write(requester) {
            return Err(AppError::Forbidden(
                "Only the creator can modify a collection".to_string(),
            ));
        }

        Ok(())
    }
}

/// Computes the membership delta between the current and desired id sets.
///
/// `to_add` is desired minus current, `to_remove` is current minus desired;
/// the two are disjoint by construction and duplicates in the input collapse
/// (membership is a set). Reconciling a set against itself yields two empty
/// deltas.
pub(crate) fn reconcile(current: &[Uuid], desired: &[Uuid]) -> (Vec<Uuid>, Vec<Uuid>) {
    let current_set: HashSet<Uuid> = current.iter().copied().collect();
    let desired_set: HashSet<Uuid> = desired.iter().copied().collect();

    let mut to_add = Vec::new();
    let mut seen = HashSet::new();
    for id in desired {
        if !current_set.contains(id) && seen.insert(*id) {
            to_add.push(*id);
        }
    }

    let mut to_remove = Vec::new();
    let mut removed = HashSet::new();
    for id in current {
        if !desired_set.contains(id) && removed.insert(*id) {
            to_remove.push(*id);
        }
    }

    (to_add, to_remove)
}

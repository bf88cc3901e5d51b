//! In-memory store implementations for service-level tests.
//!
//! A single `MemoryStore` implements every store trait over one guarded map
//! per aggregate, so tests can exercise the service layer without a database.
//! Behavior mirrors the SQL repositories: name-ordered listings, derived
//! counts, and set-semantics membership.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    data::{CollectionStore, FamilyStore, MonsterStore, UserStore},
    error::AppError,
    model::{
        collection::{
            Collection, CollectionOverview, CreateCollectionParams, UpdateCollectionParams,
        },
        family::{CreateFamilyParams, Family, ShareVisibility, UpdateFamilyParams},
        monster::{
            CreateMonsterParams, Monster, MonsterFamily, MonsterVisibility, UpdateMonsterParams,
        },
        user::{UpsertUserParams, User},
    },
};

struct StoredMonster {
    monster: Monster,
    family_id: Option<Uuid>,
}

struct StoredCollection {
    id: Uuid,
    creator_id: Uuid,
    name: String,
    description: String,
    visibility: ShareVisibility,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    users: HashMap<Uuid, User>,
    monsters: HashMap<Uuid, StoredMonster>,
    families: HashMap<Uuid, Family>,
    collections: HashMap<Uuid, StoredCollection>,
    /// collection id -> member monster ids, insertion-ordered.
    memberships: HashMap<Uuid, Vec<Uuid>>,
}

/// Test double implementing every store trait over guarded in-memory maps.
#[derive(Default, Clone)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user directly, bypassing the login upsert.
    pub fn seed_user(&self, user: User) {
        self.state.write().unwrap().users.insert(user.id, user);
    }
}

fn materialize(state: &State, stored: &StoredMonster) -> Monster {
    let mut monster = stored.monster.clone();
    monster.family = stored.family_id.and_then(|id| {
        state.families.get(&id).map(|f| MonsterFamily {
            id: f.id,
            name: f.name.clone(),
            abilities: f.abilities.clone(),
        })
    });
    monster
}

fn sorted_by_name(mut monsters: Vec<Monster>) -> Vec<Monster> {
    monsters.sort_by(|a, b| a.name.cmp(&b.name));
    monsters
}

fn family_with_count(state: &State, family: &Family) -> Family {
    let mut family = family.clone();
    family.monster_count = state
        .monsters
        .values()
        .filter(|m| m.family_id == Some(family.id))
        .count() as u64;
    family
}

fn overview(state: &State, col: &StoredCollection) -> Result<CollectionOverview, AppError> {
    let creator = state
        .users
        .get(&col.creator_id)
        .cloned()
        .ok_or_else(|| AppError::InternalError(format!("creator {} missing", col.creator_id)))?;

    let members = state.memberships.get(&col.id).cloned().unwrap_or_default();
    let legendary = members
        .iter()
        .filter(|id| state.monsters.get(id).is_some_and(|m| m.monster.legendary))
        .count() as u64;
    let standard = members.len() as u64 - legendary;

    Ok(CollectionOverview {
        id: col.id,
        creator,
        name: col.name.clone(),
        description: col.description.clone(),
        visibility: col.visibility,
        legendary_count: legendary,
        standard_count: standard,
        created_at: col.created_at,
    })
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn upsert(&self, params: UpsertUserParams) -> Result<User, AppError> {
        let mut state = self.state.write().unwrap();

        if let Some(existing) = state
            .users
            .values_mut()
            .find(|u| u.discord_id == params.discord_id)
        {
            existing.username = params.username;
            existing.avatar = params.avatar;
            return Ok(existing.clone());
        }

        let user = User {
            id: Uuid::new_v4(),
            discord_id: params.discord_id,
            username: params.username,
            avatar: params.avatar,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.state.read().unwrap().users.get(&id).cloned())
    }

    async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .state
            .read()
            .unwrap()
            .users
            .values()
            .find(|u| u.discord_id == discord_id)
            .cloned())
    }
}

#[async_trait]
impl MonsterStore for MemoryStore {
    async fn create(&self, params: CreateMonsterParams) -> Result<Monster, AppError> {
        let mut state = self.state.write().unwrap();

        let monster = Monster {
            id: Uuid::new_v4(),
            creator_id: params.creator_id,
            family: None,
            name: params.name,
            level: params.level,
            hp: params.hp,
            armor: params.armor,
            size: params.size,
            speed: params.speed,
            fly: params.fly,
            swim: params.swim,
            actions: params.actions,
            abilities: params.abilities,
            legendary: params.legendary,
            kind: params.kind,
            bloodied: params.bloodied,
            last_stand: params.last_stand,
            saves: params.saves,
            visibility: params.visibility,
            created_at: Utc::now(),
        };
        let stored = StoredMonster {
            monster,
            family_id: params.family_id,
        };
        let materialized = materialize(&state, &stored);
        state.monsters.insert(stored.monster.id, stored);
        Ok(materialized)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Monster>, AppError> {
        let state = self.state.read().unwrap();
        Ok(state.monsters.get(&id).map(|m| materialize(&state, m)))
    }

    async fn list_public(&self) -> Result<Vec<Monster>, AppError> {
        let state = self.state.read().unwrap();
        Ok(sorted_by_name(
            state
                .monsters
                .values()
                .filter(|m| m.monster.visibility == MonsterVisibility::Public)
                .map(|m| materialize(&state, m))
                .collect(),
        ))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Monster>, AppError> {
        let state = self.state.read().unwrap();
        Ok(sorted_by_name(
            state
                .monsters
                .values()
                .filter(|m| m.monster.creator_id == user_id)
                .map(|m| materialize(&state, m))
                .collect(),
        ))
    }

    async fn list_in_collection(&self, collection_id: Uuid) -> Result<Vec<Monster>, AppError> {
        let state = self.state.read().unwrap();
        let members = state
            .memberships
            .get(&collection_id)
            .cloned()
            .unwrap_or_default();
        Ok(sorted_by_name(
            members
                .iter()
                .filter_map(|id| state.monsters.get(id))
                .map(|m| materialize(&state, m))
                .collect(),
        ))
    }

    async fn update(&self, params: UpdateMonsterParams) -> Result<Monster, AppError> {
        let mut state = self.state.write().unwrap();

        let Some(stored) = state.monsters.get_mut(&params.id) else {
            return Err(AppError::NotFound("monster not found".to_string()));
        };
        stored.family_id = params.family_id;
        let m = &mut stored.monster;
        m.name = params.name;
        m.level = params.level;
        m.hp = params.hp;
        m.armor = params.armor;
        m.size = params.size;
        m.speed = params.speed;
        m.fly = params.fly;
        m.swim = params.swim;
        m.actions = params.actions;
        m.abilities = params.abilities;
        m.legendary = params.legendary;
        m.kind = params.kind;
        m.bloodied = params.bloodied;
        m.last_stand = params.last_stand;
        m.saves = params.saves;
        m.visibility = params.visibility;

        let stored = state.monsters.get(&params.id).unwrap();
        Ok(materialize(&state, stored))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().unwrap();
        state.monsters.remove(&id);
        for members in state.memberships.values_mut() {
            members.retain(|m| *m != id);
        }
        Ok(())
    }

    async fn count_in_family(&self, family_id: Uuid) -> Result<u64, AppError> {
        let state = self.state.read().unwrap();
        Ok(state
            .monsters
            .values()
            .filter(|m| m.family_id == Some(family_id))
            .count() as u64)
    }

    async fn find_existing_ids(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
        let state = self.state.read().unwrap();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| state.monsters.contains_key(id))
            .collect())
    }
}

#[async_trait]
impl FamilyStore for MemoryStore {
    async fn create(&self, params: CreateFamilyParams) -> Result<Family, AppError> {
        let mut state = self.state.write().unwrap();
        let family = Family {
            id: Uuid::new_v4(),
            creator_id: params.creator_id,
            name: params.name,
            abilities: params.abilities,
            visibility: params.visibility,
            monster_count: 0,
        };
        state.families.insert(family.id, family.clone());
        Ok(family)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Family>, AppError> {
        let state = self.state.read().unwrap();
        Ok(state
            .families
            .get(&id)
            .map(|f| family_with_count(&state, f)))
    }

    async fn list_public(&self) -> Result<Vec<Family>, AppError> {
        let state = self.state.read().unwrap();
        let mut families: Vec<Family> = state
            .families
            .values()
            .filter(|f| f.visibility == ShareVisibility::Public)
            .map(|f| family_with_count(&state, f))
            .collect();
        families.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(families)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Family>, AppError> {
        let state = self.state.read().unwrap();
        let mut families: Vec<Family> = state
            .families
            .values()
            .filter(|f| f.creator_id == user_id)
            .map(|f| family_with_count(&state, f))
            .collect();
        families.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(families)
    }

    async fn update(&self, params: UpdateFamilyParams) -> Result<Family, AppError> {
        let mut state = self.state.write().unwrap();
        let Some(family) = state.families.get_mut(&params.id) else {
            return Err(AppError::NotFound("family not found".to_string()));
        };
        family.name = params.name;
        family.abilities = params.abilities;
        family.visibility = params.visibility;

        let family = state.families.get(&params.id).unwrap();
        Ok(family_with_count(&state, family))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.state.write().unwrap().families.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn create(&self, params: CreateCollectionParams) -> Result<CollectionOverview, AppError> {
        let mut state = self.state.write().unwrap();
        let col = StoredCollection {
            id: Uuid::new_v4(),
            creator_id: params.creator_id,
            name: params.name,
            description: params.description,
            visibility: params.visibility,
            created_at: Utc::now(),
        };
        let result = overview(&state, &col)?;
        state.memberships.insert(col.id, Vec::new());
        state.collections.insert(col.id, col);
        Ok(result)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Collection>, AppError> {
        let state = self.state.read().unwrap();
        let Some(col) = state.collections.get(&id) else {
            return Ok(None);
        };

        let members = state.memberships.get(&id).cloned().unwrap_or_default();
        let monsters = sorted_by_name(
            members
                .iter()
                .filter_map(|mid| state.monsters.get(mid))
                .map(|m| materialize(&state, m))
                .collect(),
        );

        Ok(Some(Collection {
            overview: overview(&state, col)?,
            monsters,
        }))
    }

    async fn list_public(&self) -> Result<Vec<CollectionOverview>, AppError> {
        let state = self.state.read().unwrap();
        let mut overviews = state
            .collections
            .values()
            .filter(|c| c.visibility == ShareVisibility::Public)
            .map(|c| overview(&state, c))
            .collect::<Result<Vec<_>, _>>()?;
        overviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(overviews)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<CollectionOverview>, AppError> {
        let state = self.state.read().unwrap();
        let mut overviews = state
            .collections
            .values()
            .filter(|c| c.creator_id == user_id)
            .map(|c| overview(&state, c))
            .collect::<Result<Vec<_>, _>>()?;
        overviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(overviews)
    }

    async fn update(&self, params: UpdateCollectionParams) -> Result<CollectionOverview, AppError> {
        let mut state = self.state.write().unwrap();
        let Some(col) = state.collections.get_mut(&params.id) else {
            return Err(AppError::NotFound("collection not found".to_string()));
        };
        col.name = params.name;
        col.description = params.description;
        col.visibility = params.visibility;

        let col = state.collections.get(&params.id).unwrap();
        overview(&state, col)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().unwrap();
        state.collections.remove(&id);
        state.memberships.remove(&id);
        Ok(())
    }

    async fn monster_ids(&self, id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let state = self.state.read().unwrap();
        Ok(state.memberships.get(&id).cloned().unwrap_or_default())
    }

    async fn add_monster(&self, id: Uuid, monster_id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().unwrap();
        let members = state.memberships.entry(id).or_default();
        if !members.contains(&monster_id) {
            members.push(monster_id);
        }
        Ok(())
    }

    async fn remove_monster(&self, id: Uuid, monster_id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().unwrap();
        if let Some(members) = state.memberships.get_mut(&id) {
            members.retain(|m| *m != monster_id);
        }
        Ok(())
    }
}

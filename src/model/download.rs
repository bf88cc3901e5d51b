//! Compendium export format for collection downloads.
//!
//! Produces the third-party compendium pack shape consumed by virtual
//! tabletop imports: monster abilities become `features`, actions become
//! `attacks` with damage and description text concatenated, and the armor
//! token is title-cased with the unarmored case exported as `null`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::server::model::{
    collection::Collection,
    monster::{Monster, MonsterArmor},
};

/// Document type tag expected by compendium importers.
const COMPENDIUM_MONSTER_TYPE: &str = "nimblev2-monster";

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompendiumFeatureDto {
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompendiumMonsterDto {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub level: String,
    pub hp: i32,
    pub armor: Option<String>,
    pub features: Vec<CompendiumFeatureDto>,
    pub attacks: Vec<CompendiumFeatureDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CompendiumPackDto {
    pub name: String,
    pub id: Uuid,
    pub version: String,
    pub documents: Vec<CompendiumMonsterDto>,
}

impl CompendiumMonsterDto {
    fn from_monster(monster: Monster) -> Self {
        let armor = match monster.armor {
            MonsterArmor::None => None,
            MonsterArmor::Medium => Some("Medium".to_string()),
            MonsterArmor::Heavy => Some("Heavy".to_string()),
        };

        let features = monster
            .abilities
            .into_iter()
            .map(|ability| CompendiumFeatureDto {
                name: ability.name,
                description: ability.description,
            })
            .collect();

        let attacks = monster
            .actions
            .into_iter()
            .map(|action| CompendiumFeatureDto {
                name: action.name,
                description: [action.damage, action.description]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" "),
            })
            .collect();

        Self {
            name: monster.name,
            doc_type: COMPENDIUM_MONSTER_TYPE.to_string(),
            level: monster.level,
            hp: monster.hp,
            armor,
            features,
            attacks,
        }
    }
}

impl CompendiumPackDto {
    /// Builds the export pack for a collection.
    ///
    /// Documents are sorted by monster name and the pack version is the
    /// collection's creation time in unix milliseconds, so re-exports of an
    /// unchanged collection are identical.
    pub fn from_collection(collection: Collection) -> Self {
        let mut monsters = collection.monsters;
        monsters.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            name: collection.overview.name,
            id: collection.overview.id,
            version: collection.overview.created_at.timestamp_millis().to_string(),
            documents: monsters
                .into_iter()
                .map(CompendiumMonsterDto::from_monster)
                .collect(),
        }
    }
}

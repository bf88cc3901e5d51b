//! Monster domain model, enum tables, and the blob codec shared with families.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{error::data::DataError, model::user::User};

/// Monster size classes, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl MonsterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Huge => "huge",
            Self::Gargantuan => "gargantuan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "tiny" => Some(Self::Tiny),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "huge" => Some(Self::Huge),
            "gargantuan" => Some(Self::Gargantuan),
            _ => None,
        }
    }
}

/// Monster armor classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterArmor {
    None,
    Medium,
    Heavy,
}

impl MonsterArmor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }

    /// Parses a stored or submitted armor token.
    ///
    /// `""` and `"unarmored"` are deprecated encodings of the unarmored case
    /// that older rows may still carry; they are accepted on read and
    /// rewritten as `"none"` on the next write.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" | "" | "unarmored" => Some(Self::None),
            "medium" => Some(Self::Medium),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

/// Monster visibility. Monsters have no `secret` state: they are either
/// listed publicly or visible to their creator only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterVisibility {
    Public,
    Private,
}

impl MonsterVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

/// A single attack or maneuver in a monster's action list.
///
/// Actions are the unit of the stored blob format: each list entry is encoded
/// and decoded independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub description: String,
}

/// A passive trait in a monster's or family's ability list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The family a monster belongs to, as embedded in monster reads.
///
/// Carries only the fields a stat block needs; the full family model with its
/// derived monster count lives in [`super::family`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterFamily {
    pub id: Uuid,
    pub name: String,
    pub abilities: Vec<Ability>,
}

/// A monster stat block with its creator and optional family reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub id: Uuid,
    /// Id of the user who created the monster; the only identity allowed to
    /// mutate or delete it.
    pub creator_id: Uuid,
    pub family: Option<MonsterFamily>,
    pub name: String,
    /// Free-form level string, e.g. "1/3".
    pub level: String,
    pub hp: i32,
    pub armor: MonsterArmor,
    pub size: MonsterSize,
    pub speed: i32,
    pub fly: i32,
    pub swim: i32,
    pub actions: Vec<Action>,
    pub abilities: Vec<Ability>,
    pub legendary: bool,
    pub kind: String,
    pub bloodied: String,
    pub last_stand: String,
    /// Display form of the saves list, comma-joined.
    pub saves: String,
    pub visibility: MonsterVisibility,
    pub created_at: DateTime<Utc>,
}

impl Monster {
    /// Converts an entity model to a monster domain model at the repository boundary.
    ///
    /// Enum columns go through the fixed tables above and blob lists are
    /// decoded entry by entry; any unmappable stored value is a `DataError`.
    pub fn from_entity(
        entity: entity::monster::Model,
        family: Option<&entity::family::Model>,
    ) -> Result<Self, DataError> {
        let id = entity.id;

        let size = MonsterSize::parse(&entity.size).ok_or_else(|| DataError::UnknownEnumValue {
            entity: "monster",
            field: "size",
            id,
            value: entity.size.clone(),
        })?;
        let armor =
            MonsterArmor::parse(&entity.armor).ok_or_else(|| DataError::UnknownEnumValue {
                entity: "monster",
                field: "armor",
                id,
                value: entity.armor.clone(),
            })?;
        let visibility = MonsterVisibility::parse(&entity.visibility).ok_or_else(|| {
            DataError::UnknownEnumValue {
                entity: "monster",
                field: "visibility",
                id,
                value: entity.visibility.clone(),
            }
        })?;

        let actions = decode_blob_list::<Action>(&entity.actions, "monster", "actions", id)?;
        let abilities = decode_blob_list::<Ability>(&entity.abilities, "monster", "abilities", id)?;
        let saves = decode_blob_list::<String>(&entity.saves, "monster", "saves", id)?;

        let family = family
            .map(|f| {
                Ok::<_, DataError>(MonsterFamily {
                    id: f.id,
                    name: f.name.clone(),
                    abilities: decode_blob_list::<Ability>(
                        &f.abilities,
                        "family",
                        "abilities",
                        f.id,
                    )?,
                })
            })
            .transpose()?;

        Ok(Self {
            id,
            creator_id: entity.user_id,
            family,
            name: entity.name,
            level: entity.level,
            hp: entity.hp,
            armor,
            size,
            speed: entity.speed,
            fly: entity.fly,
            swim: entity.swim,
            actions,
            abilities,
            legendary: entity.legendary,
            kind: entity.kind,
            bloodied: entity.bloodied,
            last_stand: entity.last_stand,
            saves: saves_to_display(&saves),
            visibility,
            created_at: entity.created_at,
        })
    }

    /// Whether `requester` may read this monster.
    ///
    /// Public monsters are readable by anyone; private monsters only by their
    /// creator.
    pub fn can_read(&self, requester: Option<&User>) -> bool {
        match self.visibility {
            MonsterVisibility::Public => true,
            MonsterVisibility::Private => requester.is_some_and(|u| u.id == self.creator_id),
        }
    }

    /// Whether `requester` may mutate or delete this monster.
    pub fn can_write(&self, requester: &User) -> bool {
        requester.id == self.creator_id
    }
}

/// Parameters for creating a new monster.
#[derive(Debug, Clone)]
pub struct CreateMonsterParams {
    pub creator_id: Uuid,
    pub family_id: Option<Uuid>,
    pub name: String,
    pub level: String,
    pub hp: i32,
    pub armor: MonsterArmor,
    pub size: MonsterSize,
    pub speed: i32,
    pub fly: i32,
    pub swim: i32,
    pub actions: Vec<Action>,
    pub abilities: Vec<Ability>,
    pub legendary: bool,
    pub kind: String,
    pub bloodied: String,
    pub last_stand: String,
    /// Display form of the saves list; split and trimmed before storage.
    pub saves: String,
    pub visibility: MonsterVisibility,
}

/// Parameters for replacing an existing monster's fields.
#[derive(Debug, Clone)]
pub struct UpdateMonsterParams {
    pub id: Uuid,
    pub family_id: Option<Uuid>,
    pub name: String,
    pub level: String,
    pub hp: i32,
    pub armor: MonsterArmor,
    pub size: MonsterSize,
    pub speed: i32,
    pub fly: i32,
    pub swim: i32,
    pub actions: Vec<Action>,
    pub abilities: Vec<Ability>,
    pub legendary: bool,
    pub kind: String,
    pub bloodied: String,
    pub last_stand: String,
    pub saves: String,
    pub visibility: MonsterVisibility,
}

/// Decodes a stored JSON array whose entries were encoded independently.
///
/// Every entry is decoded on its own; failures are collected across the whole
/// list so a single pass reports each corrupt entry, not just the first.
pub(crate) fn decode_blob_list<T: DeserializeOwned>(
    value: &serde_json::Value,
    entity: &'static str,
    field: &'static str,
    id: Uuid,
) -> Result<Vec<T>, DataError> {
    let Some(entries) = value.as_array() else {
        return Err(DataError::CorruptBlobList {
            entity,
            field,
            id,
            details: "stored value is not a list".to_string(),
        });
    };

    let mut decoded = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<T>(entry.clone()) {
            Ok(item) => decoded.push(item),
            Err(err) => failures.push(format!("entry {index}: {err}")),
        }
    }

    if failures.is_empty() {
        Ok(decoded)
    } else {
        Err(DataError::CorruptBlobList {
            entity,
            field,
            id,
            details: failures.join("; "),
        })
    }
}

/// Encodes a list into the stored JSON array format, one blob per entry.
pub(crate) fn encode_blob_list<T: Serialize>(items: &[T]) -> serde_json::Value {
    serde_json::to_value(items).unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
}

/// Joins a stored saves list into its display form.
pub(crate) fn saves_to_display(saves: &[String]) -> String {
    saves.join(", ")
}

/// Splits a display-form saves string back into trimmed entries.
pub(crate) fn saves_to_list(display: &str) -> Vec<String> {
    display
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::monster::{
        Ability, Action, CreateMonsterParams, Monster, MonsterArmor, MonsterFamily, MonsterSize,
        MonsterVisibility, UpdateMonsterParams,
    },
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ActionDto {
    pub name: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AbilityDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Family reference embedded in monster reads.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MonsterFamilyDto {
    pub id: Uuid,
    pub name: String,
    pub abilities: Vec<AbilityDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonsterDto {
    pub id: Uuid,
    pub name: String,
    pub level: String,
    pub hp: i32,
    pub armor: String,
    pub size: String,
    pub speed: i32,
    pub fly: i32,
    pub swim: i32,
    pub actions: Vec<ActionDto>,
    pub abilities: Vec<AbilityDto>,
    pub legendary: bool,
    pub kind: String,
    pub bloodied: String,
    pub last_stand: String,
    pub saves: String,
    pub visibility: String,
    pub family: Option<MonsterFamilyDto>,
}

/// List response wrapper.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MonstersDto {
    pub monsters: Vec<MonsterDto>,
}

/// Request body for creating or replacing a monster.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonsterUpsertDto {
    pub name: String,
    #[serde(default)]
    pub level: String,
    pub hp: i32,
    #[serde(default)]
    pub armor: String,
    pub size: String,
    #[serde(default)]
    pub speed: i32,
    #[serde(default)]
    pub fly: i32,
    #[serde(default)]
    pub swim: i32,
    #[serde(default)]
    pub actions: Vec<ActionDto>,
    #[serde(default)]
    pub abilities: Vec<AbilityDto>,
    #[serde(default)]
    pub legendary: bool,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub bloodied: String,
    #[serde(default)]
    pub last_stand: String,
    #[serde(default)]
    pub saves: String,
    pub visibility: String,
    pub family_id: Option<Uuid>,
}

impl ActionDto {
    fn from_action(action: Action) -> Self {
        Self {
            name: action.name,
            damage: action.damage,
            description: action.description,
        }
    }

    fn into_action(self) -> Action {
        Action {
            name: self.name,
            damage: self.damage,
            description: self.description,
        }
    }
}

impl AbilityDto {
    pub(crate) fn from_ability(ability: Ability) -> Self {
        Self {
            name: ability.name,
            description: ability.description,
        }
    }

    pub(crate) fn into_ability(self) -> Ability {
        Ability {
            name: self.name,
            description: self.description,
        }
    }
}

impl MonsterDto {
    pub fn from_monster(monster: Monster) -> Self {
        Self {
            id: monster.id,
            name: monster.name,
            level: monster.level,
            hp: monster.hp,
            armor: monster.armor.as_str().to_string(),
            size: monster.size.as_str().to_string(),
            speed: monster.speed,
            fly: monster.fly,
            swim: monster.swim,
            actions: monster
                .actions
                .into_iter()
                .map(ActionDto::from_action)
                .collect(),
            abilities: monster
                .abilities
                .into_iter()
                .map(AbilityDto::from_ability)
                .collect(),
            legendary: monster.legendary,
            kind: monster.kind,
            bloodied: monster.bloodied,
            last_stand: monster.last_stand,
            saves: monster.saves,
            visibility: monster.visibility.as_str().to_string(),
            family: monster.family.map(MonsterFamilyDto::from_family),
        }
    }
}

impl MonsterFamilyDto {
    fn from_family(family: MonsterFamily) -> Self {
        Self {
            id: family.id,
            name: family.name,
            abilities: family
                .abilities
                .into_iter()
                .map(AbilityDto::from_ability)
                .collect(),
        }
    }
}

impl MonsterUpsertDto {
    /// Validates the enum-valued fields and builds creation parameters.
    ///
    /// The creator id is overwritten by the service with the authenticated
    /// requester.
    pub fn into_create_params(self, creator_id: Uuid) -> Result<CreateMonsterParams, AppError> {
        let (armor, size, visibility) = self.parse_enums()?;

        Ok(CreateMonsterParams {
            creator_id,
            family_id: self.family_id,
            name: self.name,
            level: self.level,
            hp: self.hp,
            armor,
            size,
            speed: self.speed,
            fly: self.fly,
            swim: self.swim,
            actions: self.actions.into_iter().map(ActionDto::into_action).collect(),
            abilities: self
                .abilities
                .into_iter()
                .map(AbilityDto::into_ability)
                .collect(),
            legendary: self.legendary,
            kind: self.kind,
            bloodied: self.bloodied,
            last_stand: self.last_stand,
            saves: self.saves,
            visibility,
        })
    }

    /// Validates the enum-valued fields and builds replacement parameters.
    pub fn into_update_params(self, id: Uuid) -> Result<UpdateMonsterParams, AppError> {
        let (armor, size, visibility) = self.parse_enums()?;

        Ok(UpdateMonsterParams {
            id,
            family_id: self.family_id,
            name: self.name,
            level: self.level,
            hp: self.hp,
            armor,
            size,
            speed: self.speed,
            fly: self.fly,
            swim: self.swim,
            actions: self.actions.into_iter().map(ActionDto::into_action).collect(),
            abilities: self
                .abilities
                .into_iter()
                .map(AbilityDto::into_ability)
                .collect(),
            legendary: self.legendary,
            kind: self.kind,
            bloodied: self.bloodied,
            last_stand: self.last_stand,
            saves: self.saves,
            visibility,
        })
    }

    fn parse_enums(&self) -> Result<(MonsterArmor, MonsterSize, MonsterVisibility), AppError> {
        let armor = MonsterArmor::parse(&self.armor)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown armor '{}'", self.armor)))?;
        let size = MonsterSize::parse(&self.size)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown size '{}'", self.size)))?;
        let visibility = MonsterVisibility::parse(&self.visibility).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown visibility '{}'", self.visibility))
        })?;

        Ok((armor, size, visibility))
    }
}

use crate::server::{
    data::{monster::MonsterRepository, MonsterStore},
    error::AppError,
    model::monster::{
        Ability, Action, CreateMonsterParams, MonsterArmor, MonsterSize, MonsterVisibility,
        UpdateMonsterParams,
    },
};
use test_utils::builder::TestBuilder;
use uuid::Uuid;

mod create;
mod delete;
mod find_existing_ids;
mod get_by_id;
mod list;

/// Baseline creation parameters for a small private goblin.
fn goblin_params(creator_id: Uuid) -> CreateMonsterParams {
    CreateMonsterParams {
        creator_id,
        family_id: None,
        name: "Goblin".to_string(),
        level: "1/3".to_string(),
        hp: 12,
        armor: MonsterArmor::None,
        size: MonsterSize::Small,
        speed: 6,
        fly: 0,
        swim: 0,
        actions: vec![Action {
            name: "Slash".to_string(),
            damage: "1d6".to_string(),
            description: String::new(),
        }],
        abilities: vec![Ability {
            name: "Nimble Escape".to_string(),
            description: "Disengage as a bonus action".to_string(),
        }],
        legendary: false,
        kind: String::new(),
        bloodied: String::new(),
        last_stand: String::new(),
        saves: String::new(),
        visibility: MonsterVisibility::Private,
    }
}

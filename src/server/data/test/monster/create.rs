use super::*;
use serde_json::json;
use test_utils::factory::{family::FamilyFactory, user::create_user};

/// Tests creating a standard monster.
///
/// Verifies that the repository stores and round-trips the stat block,
/// including the action/ability blob lists.
///
/// Expected: Ok with all fields intact
#[tokio::test]
async fn creates_standard_monster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = MonsterRepository::new(db.clone());

    let monster = repo.create(goblin_params(user.id)).await?;

    assert_eq!(monster.name, "Goblin");
    assert_eq!(monster.level, "1/3");
    assert_eq!(monster.hp, 12);
    assert_eq!(monster.armor, MonsterArmor::None);
    assert_eq!(monster.size, MonsterSize::Small);
    assert_eq!(monster.creator_id, user.id);
    assert_eq!(monster.actions.len(), 1);
    assert_eq!(monster.actions[0].name, "Slash");
    assert_eq!(monster.abilities.len(), 1);
    assert!(!monster.legendary);

    Ok(())
}

/// Tests creating a legendary monster.
///
/// Verifies that the legendary-only fields are stored and the saves display
/// string is normalized through the stored list representation.
///
/// Expected: Ok with legendary fields and trimmed saves
#[tokio::test]
async fn creates_legendary_monster_with_saves() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = MonsterRepository::new(db.clone());

    let mut params = goblin_params(user.id);
    params.name = "Ancient Dragon".to_string();
    params.legendary = true;
    params.kind = "Dragon".to_string();
    params.bloodied = "Gains +2 to AC".to_string();
    params.last_stand = "Makes one final attack".to_string();
    params.saves = "STR++,  DEX+ ,WIL+++".to_string();

    let monster = repo.create(params).await?;

    assert!(monster.legendary);
    assert_eq!(monster.kind, "Dragon");
    assert_eq!(monster.bloodied, "Gains +2 to AC");
    assert_eq!(monster.last_stand, "Makes one final attack");
    assert_eq!(monster.saves, "STR++, DEX+, WIL+++");

    Ok(())
}

/// Tests creating a monster attached to a family.
///
/// Expected: Ok with the family reference and its abilities embedded
#[tokio::test]
async fn creates_monster_with_family_embed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let family = FamilyFactory::new(db, user.id)
        .name("Goblinoids")
        .abilities_json(json!([{"name": "Pack Tactics", "description": "Advantage near allies"}]))
        .build()
        .await?;

    let repo = MonsterRepository::new(db.clone());

    let mut params = goblin_params(user.id);
    params.family_id = Some(family.id);

    let monster = repo.create(params).await?;

    let embedded = monster.family.expect("family should be embedded");
    assert_eq!(embedded.id, family.id);
    assert_eq!(embedded.name, "Goblinoids");
    assert_eq!(embedded.abilities.len(), 1);
    assert_eq!(embedded.abilities[0].name, "Pack Tactics");

    Ok(())
}

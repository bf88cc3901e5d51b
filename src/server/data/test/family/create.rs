use super::*;
use test_utils::factory::user::create_user;

/// Tests creating a family with its shared abilities.
///
/// Expected: Ok with abilities round-tripped and a zero monster count
#[tokio::test]
async fn creates_family_with_abilities() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = FamilyRepository::new(db.clone());

    let family = repo
        .create(CreateFamilyParams {
            creator_id: user.id,
            name: "Goblinoids".to_string(),
            abilities: vec![Ability {
                name: "Pack Tactics".to_string(),
                description: "Advantage near allies".to_string(),
            }],
            visibility: ShareVisibility::Public,
        })
        .await?;

    assert_eq!(family.name, "Goblinoids");
    assert_eq!(family.creator_id, user.id);
    assert_eq!(family.abilities.len(), 1);
    assert_eq!(family.visibility, ShareVisibility::Public);
    assert_eq!(family.monster_count, 0);

    Ok(())
}

/// Tests the full-replace update of a family.
///
/// Expected: Ok with replaced name, abilities, and visibility
#[tokio::test]
async fn replaces_family_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = FamilyRepository::new(db.clone());

    let created = repo
        .create(CreateFamilyParams {
            creator_id: user.id,
            name: "Goblinoids".to_string(),
            abilities: Vec::new(),
            visibility: ShareVisibility::Private,
        })
        .await?;

    let updated = repo
        .update(UpdateFamilyParams {
            id: created.id,
            name: "Hobgoblins".to_string(),
            abilities: vec![Ability {
                name: "Martial Advantage".to_string(),
                description: String::new(),
            }],
            visibility: ShareVisibility::Secret,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Hobgoblins");
    assert_eq!(updated.abilities.len(), 1);
    assert_eq!(updated.visibility, ShareVisibility::Secret);

    Ok(())
}

use super::*;
use test_utils::factory::{family::create_family, monster::MonsterFactory, user::create_user};
use uuid::Uuid;

/// Tests fetching an unknown family id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FamilyRepository::new(db.clone());

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}

/// Tests that the derived monster count reflects referencing monsters.
///
/// Expected: count matches the number of monsters pointing at the family
#[tokio::test]
async fn derives_monster_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let family = create_family(db, user.id).await?;
    MonsterFactory::new(db, user.id)
        .family_id(family.id)
        .build()
        .await?;
    MonsterFactory::new(db, user.id)
        .family_id(family.id)
        .build()
        .await?;
    MonsterFactory::new(db, user.id).build().await?;

    let repo = FamilyRepository::new(db.clone());
    let fetched = repo.get_by_id(family.id).await?.unwrap();

    assert_eq!(fetched.monster_count, 2);

    Ok(())
}

/// Tests deleting an unreferenced family.
///
/// Expected: subsequent fetch returns None
#[tokio::test]
async fn deletes_family() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let family = create_family(db, user.id).await?;

    let repo = FamilyRepository::new(db.clone());
    repo.delete(family.id).await?;

    assert!(repo.get_by_id(family.id).await?.is_none());

    Ok(())
}

use super::*;
use test_utils::factory::{
    collection::{add_monster_to_collection, create_collection},
    monster::MonsterFactory,
    user::create_user,
};

/// Tests that the public listing excludes private monsters.
///
/// Expected: only public monsters, ordered by name
#[tokio::test]
async fn public_listing_excludes_private_monsters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    MonsterFactory::new(db, user.id)
        .name("Zombie")
        .visibility("public")
        .build()
        .await?;
    MonsterFactory::new(db, user.id)
        .name("Ankheg")
        .visibility("public")
        .build()
        .await?;
    MonsterFactory::new(db, user.id)
        .name("Hidden Horror")
        .visibility("private")
        .build()
        .await?;

    let repo = MonsterRepository::new(db.clone());
    let monsters = repo.list_public().await?;

    let names: Vec<&str> = monsters.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ankheg", "Zombie"]);

    Ok(())
}

/// Tests that the per-user listing returns the owner's monsters regardless of
/// visibility and nobody else's.
///
/// Expected: both of the owner's monsters, none of the other user's
#[tokio::test]
async fn user_listing_includes_private_monsters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    MonsterFactory::new(db, owner.id)
        .name("Mine Public")
        .visibility("public")
        .build()
        .await?;
    MonsterFactory::new(db, owner.id)
        .name("Mine Private")
        .visibility("private")
        .build()
        .await?;
    MonsterFactory::new(db, other.id)
        .name("Theirs")
        .visibility("public")
        .build()
        .await?;

    let repo = MonsterRepository::new(db.clone());
    let monsters = repo.list_for_user(owner.id).await?;

    let names: Vec<&str> = monsters.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Mine Private", "Mine Public"]);

    Ok(())
}

/// Tests listing the members of a collection through the join table.
///
/// Expected: exactly the associated monsters, ordered by name
#[tokio::test]
async fn lists_collection_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let collection = create_collection(db, user.id).await?;
    let in_a = MonsterFactory::new(db, user.id).name("Bandit").build().await?;
    let in_b = MonsterFactory::new(db, user.id).name("Archer").build().await?;
    MonsterFactory::new(db, user.id).name("Outsider").build().await?;

    add_monster_to_collection(db, collection.id, in_a.id).await?;
    add_monster_to_collection(db, collection.id, in_b.id).await?;

    let repo = MonsterRepository::new(db.clone());
    let members = repo.list_in_collection(collection.id).await?;

    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Archer", "Bandit"]);

    Ok(())
}

use super::*;
use test_utils::factory::{
    collection::{add_monster_to_collection, create_collection},
    user::create_user,
};

/// Tests deleting a monster.
///
/// Expected: subsequent fetch returns None
#[tokio::test]
async fn deletes_monster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = MonsterRepository::new(db.clone());

    let monster = repo.create(goblin_params(user.id)).await?;
    repo.delete(monster.id).await?;

    assert!(repo.get_by_id(monster.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a monster removes its collection memberships.
///
/// Expected: the collection's member list no longer includes the monster
#[tokio::test]
async fn delete_cascades_collection_membership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = MonsterRepository::new(db.clone());
    let monster = repo.create(goblin_params(user.id)).await?;
    let collection = create_collection(db, user.id).await?;
    add_monster_to_collection(db, collection.id, monster.id).await?;

    repo.delete(monster.id).await?;

    assert!(repo.list_in_collection(collection.id).await?.is_empty());

    Ok(())
}

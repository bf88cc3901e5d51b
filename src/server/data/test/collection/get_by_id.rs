use super::*;
use test_utils::factory::{
    collection::{add_monster_to_collection, create_collection},
    monster::MonsterFactory,
    user::create_user,
};
use uuid::Uuid;

/// Tests fetching an unknown collection id.
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

    let repo = CollectionRepository::new(db.clone());

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}

/// Tests fetching a collection with members.
///
/// The collection row and member list are read in parallel; the derived
/// legendary/standard counts come from the members.
///
/// Expected: Ok with members and correct counts
#[tokio::test]
async fn fetches_members_and_derived_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let collection = create_collection(db, user.id).await?;
    let dragon = MonsterFactory::new(db, user.id)
        .name("Dragon")
        .legendary(true)
        .build()
        .await?;
    let goblin = MonsterFactory::new(db, user.id).name("Goblin").build().await?;

    add_monster_to_collection(db, collection.id, dragon.id).await?;
    add_monster_to_collection(db, collection.id, goblin.id).await?;

    let repo = CollectionRepository::new(db.clone());
    let fetched = repo.get_by_id(collection.id).await?.unwrap();

    assert_eq!(fetched.monsters.len(), 2);
    assert_eq!(fetched.overview.legendary_count, 1);
    assert_eq!(fetched.overview.standard_count, 1);
    assert_eq!(fetched.overview.creator.id, user.id);

    Ok(())
}

use super::*;
use test_utils::factory::{
    collection::create_collection, monster::create_monster, user::create_user,
};

/// Tests the add/remove association calls and the membership id listing.
///
/// Expected: membership reflects each association change
#[tokio::test]
async fn adds_and_removes_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let collection = create_collection(db, user.id).await?;
    let a = create_monster(db, user.id).await?;
    let b = create_monster(db, user.id).await?;

    let repo = CollectionRepository::new(db.clone());

    repo.add_monster(collection.id, a.id).await?;
    repo.add_monster(collection.id, b.id).await?;

    let ids = repo.monster_ids(collection.id).await?;
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&b.id));

    repo.remove_monster(collection.id, a.id).await?;

    let ids = repo.monster_ids(collection.id).await?;
    assert_eq!(ids, vec![b.id]);

    Ok(())
}

/// Tests that deleting a collection removes its membership rows.
///
/// Expected: membership listing is empty after the delete
#[tokio::test]
async fn delete_removes_membership_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let collection = create_collection(db, user.id).await?;
    let monster = create_monster(db, user.id).await?;

    let repo = CollectionRepository::new(db.clone());
    repo.add_monster(collection.id, monster.id).await?;

    repo.delete(collection.id).await?;

    assert!(repo.get_by_id(collection.id).await?.is_none());
    assert!(repo.monster_ids(collection.id).await?.is_empty());

    Ok(())
}

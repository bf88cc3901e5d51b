use super::*;
use test_utils::factory::user::create_user;

/// Tests creating a collection.
///
/// Expected: Ok with the creator embedded and zero member counts
#[tokio::test]
async fn creates_collection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = CollectionRepository::new(db.clone());

    let overview = repo
        .create(CreateCollectionParams {
            creator_id: user.id,
            name: "Dungeon Pack".to_string(),
            description: "First floor".to_string(),
            visibility: ShareVisibility::Public,
        })
        .await?;

    assert_eq!(overview.name, "Dungeon Pack");
    assert_eq!(overview.description, "First floor");
    assert_eq!(overview.creator.id, user.id);
    assert_eq!(overview.legendary_count, 0);
    assert_eq!(overview.standard_count, 0);

    Ok(())
}

/// Tests updating a collection's metadata.
///
/// Expected: Ok with replaced name, description, and visibility
#[tokio::test]
async fn updates_collection_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = CollectionRepository::new(db.clone());

    let created = repo
        .create(CreateCollectionParams {
            creator_id: user.id,
            name: "Dungeon Pack".to_string(),
            description: String::new(),
            visibility: ShareVisibility::Private,
        })
        .await?;

    let updated = repo
        .update(UpdateCollectionParams {
            id: created.id,
            name: "Renamed Pack".to_string(),
            description: "Now with notes".to_string(),
            visibility: ShareVisibility::Secret,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed Pack");
    assert_eq!(updated.description, "Now with notes");
    assert_eq!(updated.visibility, ShareVisibility::Secret);

    Ok(())
}

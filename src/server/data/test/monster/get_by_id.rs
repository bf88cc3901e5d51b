use super::*;
use crate::server::error::data::DataError;
use serde_json::json;
use test_utils::factory::{monster::MonsterFactory, user::create_user};

/// Tests fetching an unknown monster id.
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

    let repo = MonsterRepository::new(db.clone());

    assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}

/// Tests that a legacy empty armor token stored by an older writer still
/// decodes as the unarmored case.
///
/// Expected: Ok with armor mapped to None
#[tokio::test]
async fn accepts_legacy_empty_armor_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let row = MonsterFactory::new(db, user.id).armor("").build().await?;

    let repo = MonsterRepository::new(db.clone());
    let monster = repo.get_by_id(row.id).await?.unwrap();

    assert_eq!(monster.armor, MonsterArmor::None);

    Ok(())
}

/// Tests that corrupt stored action blobs surface as a data error.
///
/// Expected: Err(DataErr) reporting the undecodable entries
#[tokio::test]
async fn corrupt_action_blobs_are_a_data_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let row = MonsterFactory::new(db, user.id)
        .actions_json(json!([42, "nonsense"]))
        .build()
        .await?;

    let repo = MonsterRepository::new(db.clone());
    let err = repo.get_by_id(row.id).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::CorruptBlobList { field: "actions", .. })
    ));

    Ok(())
}

/// Tests that an unrecognized stored size value surfaces as a data error
/// rather than a default.
///
/// Expected: Err(DataErr::UnknownEnumValue)
#[tokio::test]
async fn unknown_stored_size_is_a_data_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let row = MonsterFactory::new(db, user.id)
        .size("colossal")
        .build()
        .await?;

    let repo = MonsterRepository::new(db.clone());
    let err = repo.get_by_id(row.id).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::UnknownEnumValue { field: "size", .. })
    ));

    Ok(())
}

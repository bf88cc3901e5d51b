use super::*;
use test_utils::factory::{monster::create_monster, user::create_user};

/// Tests filtering a candidate id set down to the ids that exist.
///
/// Expected: only the stored ids come back; unknown ids are dropped
#[tokio::test]
async fn returns_only_existing_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let a = create_monster(db, user.id).await?;
    let b = create_monster(db, user.id).await?;
    let unknown = Uuid::new_v4();

    let repo = MonsterRepository::new(db.clone());
    let existing = repo.find_existing_ids(&[a.id, unknown, b.id]).await?;

    assert_eq!(existing.len(), 2);
    assert!(existing.contains(&a.id));
    assert!(existing.contains(&b.id));
    assert!(!existing.contains(&unknown));

    Ok(())
}

/// Tests the empty input short-circuit.
///
/// Expected: Ok(empty) without touching the database
#[tokio::test]
async fn empty_input_yields_empty_output() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonsterRepository::new(db.clone());

    assert!(repo.find_existing_ids(&[]).await?.is_empty());

    Ok(())
}

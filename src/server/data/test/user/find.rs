use super::*;
use test_utils::factory::user::create_user;
use uuid::Uuid;

/// Tests finding a user by internal id and by Discord id.
///
/// Expected: Ok(Some) for existing users through both lookups
#[tokio::test]
async fn finds_user_by_both_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_user(db).await?;

    let repo = UserRepository::new(db.clone());

    let by_id = repo.find_by_id(created.id).await?;
    assert_eq!(by_id.map(|u| u.id), Some(created.id));

    let by_discord = repo.find_by_discord_id(&created.discord_id).await?;
    assert_eq!(by_discord.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests lookups for identifiers that do not exist.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn returns_none_for_unknown_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db.clone());

    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());
    assert!(repo.find_by_discord_id("999999").await?.is_none());

    Ok(())
}

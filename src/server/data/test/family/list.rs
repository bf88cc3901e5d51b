use super::*;
use test_utils::factory::{family::FamilyFactory, user::create_user};

/// Tests that the public listing contains only public families.
///
/// Secret families are fetchable by direct id but must never be listed.
///
/// Expected: only the public family, ordered by name
#[tokio::test]
async fn public_listing_excludes_private_and_secret() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    FamilyFactory::new(db, user.id)
        .name("Public Kin")
        .visibility("public")
        .build()
        .await?;
    FamilyFactory::new(db, user.id)
        .name("Private Kin")
        .visibility("private")
        .build()
        .await?;
    FamilyFactory::new(db, user.id)
        .name("Secret Kin")
        .visibility("secret")
        .build()
        .await?;

    let repo = FamilyRepository::new(db.clone());
    let families = repo.list_public().await?;

    let names: Vec<&str> = families.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Public Kin"]);

    Ok(())
}

/// Tests that the per-user listing returns the owner's families regardless of
/// visibility.
///
/// Expected: all three of the owner's families
#[tokio::test]
async fn user_listing_includes_all_visibilities() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_bestiary_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = create_user(db).await?;
    let other = create_user(db).await?;
    for (name, visibility) in [
        ("A Kin", "public"),
        ("B Kin", "private"),
        ("C Kin", "secret"),
    ] {
        FamilyFactory::new(db, owner.id)
            .name(name)
            .visibility(visibility)
            .build()
            .await?;
    }
    FamilyFactory::new(db, other.id)
        .name("Other Kin")
        .visibility("public")
        .build()
        .await?;

    let repo = FamilyRepository::new(db.clone());
    let families = repo.list_for_user(owner.id).await?;

    let names: Vec<&str> = families.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["A Kin", "B Kin", "C Kin"]);

    Ok(())
}

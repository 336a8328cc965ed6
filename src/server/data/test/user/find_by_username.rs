use super::*;

/// Tests finding a user by exact username among several users.
///
/// Expected: Ok(Some(User)) for the requested username only
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("bob").await?.unwrap();

    assert_eq!(user.id, bob.id);
    assert_eq!(user.username, "bob");

    Ok(())
}

/// Tests that lookups for unknown usernames return nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}

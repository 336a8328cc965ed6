use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository inserts a user record with the provided
/// username and password hash and assigns an ID.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "hash");

    Ok(())
}

/// Tests that usernames are unique.
///
/// Verifies that inserting a second user with an existing username fails with a
/// unique constraint violation rather than creating a duplicate row.
///
/// Expected: Err(DbErr) recognised as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
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

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

use super::*;

/// Tests that only the requested author's messages are returned.
///
/// Expected: Ok with the author's two messages, newest first
#[tokio::test]
async fn returns_only_authors_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    let first = factory::message::create_message(db, alice.id).await?;
    factory::message::create_message(db, bob.id).await?;
    let second = factory::message::create_message(db, alice.id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_by_author(alice.id).await?;

    assert_eq!(
        messages.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
    assert!(messages.iter().all(|m| m.author_id == alice.id));

    Ok(())
}

/// Tests a user without messages.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = MessageRepository::new(db);

    assert!(repo.get_by_author(user.id).await?.is_empty());

    Ok(())
}

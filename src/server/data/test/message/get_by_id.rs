use super::*;

/// Tests retrieving an existing message.
///
/// Expected: Ok(Some(Message)) matching the stored row
#[tokio::test]
async fn returns_existing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, created) = factory::helpers::create_message_with_author(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(message.id, created.id);
    assert_eq!(message.author_name, author.username);
    assert_eq!(message.message, created.message);

    Ok(())
}

/// Tests retrieving a message that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());
    assert!(repo.get_author_id(42).await?.is_none());

    Ok(())
}

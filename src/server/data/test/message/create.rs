use super::*;

/// Tests creating a new message.
///
/// Verifies that the message is stored with a zero vote count and returned with
/// the author's username resolved.
///
/// Expected: Ok with message created
#[tokio::test]
async fn creates_message_with_author_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParam {
            author_id: author.id,
            message: "Hello, board".to_string(),
        })
        .await?;

    assert!(message.id > 0);
    assert_eq!(message.author_id, author.id);
    assert_eq!(message.author_name, "alice");
    assert_eq!(message.message, "Hello, board");
    assert_eq!(message.vote_count, 0);

    Ok(())
}

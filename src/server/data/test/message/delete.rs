use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a message that has votes.
///
/// Verifies that the message row and all of its vote rows are removed while
/// votes on other messages are kept.
///
/// Expected: Ok(true), message and its votes gone
#[tokio::test]
async fn deletes_message_and_its_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, message) = factory::helpers::create_message_with_author(db).await?;
    let other = factory::message::create_message(db, author.id).await?;
    factory::vote::create_vote(db, message.id, author.id, "up").await?;
    factory::vote::create_vote(db, message.id, author.id, "down").await?;
    factory::vote::create_vote(db, other.id, author.id, "up").await?;

    let repo = MessageRepository::new(db);
    let deleted = repo.delete(message.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(message.id).await?.is_none());
    assert!(repo.get_by_id(other.id).await?.is_some());
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a message that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}

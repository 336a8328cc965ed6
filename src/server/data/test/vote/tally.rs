use super::*;

/// Tests tallying votes split across two messages.
///
/// Expected: each tally only counts its own message's votes
#[tokio::test]
async fn counts_votes_per_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, first) = factory::helpers::create_message_with_author(db).await?;
    let second = factory::message::create_message(db, author.id).await?;

    factory::vote::create_vote(db, first.id, author.id, "up").await?;
    factory::vote::create_vote(db, first.id, author.id, "up").await?;
    factory::vote::create_vote(db, first.id, author.id, "down").await?;
    factory::vote::create_vote(db, second.id, author.id, "down").await?;

    let repo = VoteRepository::new(db);

    let first_tally = repo.tally(first.id).await?;
    assert_eq!(first_tally.upvotes, 2);
    assert_eq!(first_tally.downvotes, 1);
    assert_eq!(first_tally.score(), 1);

    let second_tally = repo.tally(second.id).await?;
    assert_eq!(second_tally.upvotes, 0);
    assert_eq!(second_tally.downvotes, 1);

    Ok(())
}

/// Tests tallying a message without votes.
///
/// Expected: zero upvotes and downvotes
#[tokio::test]
async fn returns_zero_tally_without_votes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, message) = factory::helpers::create_message_with_author(db).await?;

    let tally = VoteRepository::new(db).tally(message.id).await?;

    assert_eq!(tally.upvotes, 0);
    assert_eq!(tally.downvotes, 0);
    assert_eq!(tally.score(), 0);

    Ok(())
}

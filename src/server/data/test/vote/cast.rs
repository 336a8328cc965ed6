use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests casting a single upvote.
///
/// Verifies that the vote is recorded and the message's stored vote count
/// becomes one.
///
/// Expected: Ok(Vote) and vote_count == 1
#[tokio::test]
async fn records_upvote_and_updates_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, message) = factory::helpers::create_message_with_author(db).await?;

    let vote = VoteRepository::new(db)
        .cast(CastVoteParam {
            message_id: message.id,
            user_id: author.id,
            direction: VoteDirection::Up,
        })
        .await?;

    assert_eq!(vote.message_id, message.id);
    assert_eq!(vote.user_id, author.id);
    assert_eq!(vote.direction, VoteDirection::Up);

    let stored = MessageRepository::new(db)
        .get_by_id(message.id)
        .await?
        .unwrap();
    assert_eq!(stored.vote_count, 1);

    Ok(())
}

/// Tests that the stored count always equals upvotes minus downvotes.
///
/// Casts two upvotes and three downvotes from different users.
///
/// Expected: vote_count == -1 and five vote rows recorded
#[tokio::test]
async fn keeps_count_equal_to_score() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, message) = factory::helpers::create_message_with_author(db).await?;
    let voter = factory::user::create_user(db).await?;

    let repo = VoteRepository::new(db);
    let directions = [
        VoteDirection::Up,
        VoteDirection::Down,
        VoteDirection::Down,
        VoteDirection::Up,
        VoteDirection::Down,
    ];
    for direction in directions {
        repo.cast(CastVoteParam {
            message_id: message.id,
            user_id: voter.id,
            direction,
        })
        .await?;
    }

    let stored = MessageRepository::new(db)
        .get_by_id(message.id)
        .await?
        .unwrap();
    assert_eq!(stored.vote_count, -1);
    let recorded = entity::prelude::Vote::find()
        .filter(entity::vote::Column::MessageId.eq(message.id))
        .count(db)
        .await?;
    assert_eq!(recorded, 5);

    Ok(())
}

/// Tests that a stale stored count is corrected by the next vote.
///
/// The factory seeds an arbitrary vote_count without vote rows; casting one
/// downvote recomputes the count from the recorded votes.
///
/// Expected: vote_count == -1
#[tokio::test]
async fn recomputes_count_from_recorded_votes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let message = factory::message::MessageFactory::new(db, author.id)
        .vote_count(10)
        .build()
        .await?;

    VoteRepository::new(db)
        .cast(CastVoteParam {
            message_id: message.id,
            user_id: author.id,
            direction: VoteDirection::Down,
        })
        .await?;

    let stored = MessageRepository::new(db)
        .get_by_id(message.id)
        .await?
        .unwrap();
    assert_eq!(stored.vote_count, -1);

    Ok(())
}

/// Tests casting a vote on a message that does not exist.
///
/// The foreign key rejects the insert inside the transaction, so nothing is
/// recorded.
///
/// Expected: Err(AppError::DbErr) with a foreign key violation, no vote rows
#[tokio::test]
async fn fails_foreign_key_for_missing_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vote_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::user::create_user(db).await?;

    let result = VoteRepository::new(db)
        .cast(CastVoteParam {
            message_id: 404,
            user_id: voter.id,
            direction: VoteDirection::Up,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(ref err))
            if matches!(err.sql_err(), Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))
    ));
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 0);

    Ok(())
}

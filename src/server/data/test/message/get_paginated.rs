use super::*;

/// Tests that pages are returned newest first with the total count.
///
/// Creates five messages and requests pages of two.
///
/// Expected: first page holds the two newest messages, last page holds one
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let mut ids = Vec::new();
    for i in 0..5 {
        let message = factory::message::MessageFactory::new(db, author.id)
            .message(format!("Message number {}", i))
            .build()
            .await?;
        ids.push(message.id);
    }

    let repo = MessageRepository::new(db);

    let (first_page, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(
        first_page.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![ids[4], ids[3]]
    );

    let (last_page, _) = repo.get_paginated(2, 2).await?;
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].id, ids[0]);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with empty page and the real total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_message_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_message_with_author(db).await?;

    let repo = MessageRepository::new(db);
    let (messages, total) = repo.get_paginated(3, 10).await?;

    assert!(messages.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

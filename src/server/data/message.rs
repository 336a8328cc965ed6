//! Message data repository.
//!
//! Reads always join the author so the domain model carries the author's username.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::message::{CreateMessageParam, Message};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new message with a zero vote count and returns it with its author.
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, DbErr> {
        let message = entity::message::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            message: ActiveValue::Set(param.message),
            vote_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(message.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Message with id {} not found after creation",
                message.id
            )))
    }

    /// Gets a message by ID together with its author.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let result = entity::prelude::Message::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(message, author)| Message::from_entity(message, author)))
    }

    /// Returns the author ID of a message, or `None` if the message does not exist.
    pub async fn get_author_id(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let message = entity::prelude::Message::find_by_id(id).one(self.db).await?;

        Ok(message.map(|m| m.author_id))
    }

    /// Gets one page of messages, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of messages per page, must be greater than zero
    ///
    /// # Returns
    /// - `Ok((messages, total))` - Messages for the page and the total message count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Message>, u64), DbErr> {
        let paginator = entity::prelude::Message::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::message::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let messages = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(message, author)| Message::from_entity(message, author))
            .collect();

        Ok((messages, total))
    }

    /// Gets every message written by a user, newest first.
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Message>, DbErr> {
        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::AuthorId.eq(author_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(message, author)| Message::from_entity(message, author))
            .collect();

        Ok(messages)
    }

    /// Deletes a message and its votes in a single transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The message existed and was deleted
    /// - `Ok(false)` - No message with that ID
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::MessageId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Message::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

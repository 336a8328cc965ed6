//! Vote factory for creating raw vote rows.
//!
//! Inserting through the factory does not touch `message.vote_count`; use the
//! application's vote repository when the tally must stay consistent.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a vote row with the given direction (`"up"` or `"down"`).
pub async fn create_vote(
    db: &DatabaseConnection,
    message_id: i32,
    user_id: i32,
    direction: &str,
) -> Result<entity::vote::Model, DbErr> {
    entity::vote::ActiveModel {
        message_id: ActiveValue::Set(message_id),
        user_id: ActiveValue::Set(user_id),
        direction: ActiveValue::Set(direction.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Username and password submitted to register or log in.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CredentialsDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// users 表实体
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

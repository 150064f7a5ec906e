use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// stores 表实体
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StoreEntity {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

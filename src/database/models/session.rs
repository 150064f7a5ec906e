use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::session::Session;

/// session_info 表实体
#[derive(Debug, Clone, FromRow)]
pub struct SessionEntity {
    pub access_token: String,
    pub user_id: i64,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<SessionEntity> for Session {
    fn from(entity: SessionEntity) -> Self {
        Session {
            token: entity.access_token,
            user_id: entity.user_id,
            user_agent: entity.user_agent,
            created_at: entity.created_at,
            expires_at: entity.expires_at,
        }
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::session::SessionEntity;
use crate::session::{Session, SessionError, SessionTier};

/// Postgres 实现的会话持久层，系统的权威数据源
///
/// 本层没有自己的 TTL，expires_at 只是一个普通字段，
/// 由 SessionManager 负责解释。
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        PgSessionStore { pool }
    }
}

#[async_trait]
impl SessionTier for PgSessionStore {
    async fn get(&self, token: &str) -> Result<Option<Session>, SessionError> {
        let entity = sqlx::query_as::<_, SessionEntity>(
            r#"
            SELECT access_token, user_id, user_agent, created_at, expires_at
            FROM session_info
            WHERE access_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Session::from))
    }

    async fn put(&self, session: &Session) -> Result<(), SessionError> {
        // upsert：回写修复和创建共用同一条语句
        sqlx::query(
            r#"
            INSERT INTO session_info (access_token, user_id, user_agent, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (access_token) DO UPDATE
            SET user_id = EXCLUDED.user_id,
                user_agent = EXCLUDED.user_agent,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(&session.token)
        .bind(session.user_id)
        .bind(&session.user_agent)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<(), SessionError> {
        sqlx::query("DELETE FROM session_info WHERE access_token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, SessionError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM session_info WHERE access_token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

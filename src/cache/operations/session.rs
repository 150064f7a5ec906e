use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys::session_keys::session_key;
use crate::cache::models::session::CachedSession;
use crate::session::{Session, SessionError, SessionTier};

/// Redis 实现的会话缓存层
///
/// 值为 JSON 序列化的 CachedSession，键带独立的 Redis TTL，
/// 由会话剩余有效期推出，保证缓存条目不会比会话本身活得更久。
pub struct RedisSessionCache {
    redis: Arc<RedisClient>,
}

impl RedisSessionCache {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        RedisSessionCache { redis }
    }
}

fn serde_to_redis_error(e: serde_json::Error) -> redis::RedisError {
    redis::RedisError::from((redis::ErrorKind::IoError, "序列化错误", e.to_string()))
}

#[async_trait]
impl SessionTier for RedisSessionCache {
    async fn get(&self, token: &str) -> Result<Option<Session>, SessionError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let result: Option<String> = conn.get(session_key(token)).await?;
        match result {
            Some(json) => {
                let cached: CachedSession =
                    serde_json::from_str(&json).map_err(serde_to_redis_error)?;
                Ok(cached.into_session())
            }
            None => Ok(None),
        }
    }

    async fn put(&self, session: &Session) -> Result<(), SessionError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let json =
            serde_json::to_string(&CachedSession::from(session)).map_err(serde_to_redis_error)?;

        // 键 TTL 跟随会话剩余有效期，至少 1 秒
        let ttl = session.remaining_secs().max(1);
        let _: () = conn.set_ex(session_key(&session.token), json, ttl).await?;

        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<(), SessionError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let _: () = conn.del(session_key(token)).await?;

        Ok(())
    }

    async fn exists(&self, token: &str) -> Result<bool, SessionError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;

        let exists: bool = conn.exists(session_key(token)).await?;

        Ok(exists)
    }
}

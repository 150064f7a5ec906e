use async_trait::async_trait;
use thiserror::Error;

use crate::session::model::Session;

/// 会话子系统的错误类型
///
/// NotFound 对调用方表现为未认证；两种存储错误是瞬时故障，
/// 过期和不存在的 token 对外不可区分。
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("会话不存在或已过期")]
    NotFound,
    #[error("会话缓存访问失败: {0}")]
    Cache(#[from] redis::RedisError),
    #[error("会话存储访问失败: {0}")]
    Store(#[from] sqlx::Error),
}

/// 单层会话存储的统一契约，缓存层和持久层各实现一次
///
/// get 返回 None 表示该层没有记录，不是错误；delete 幂等，
/// 删除不存在的 token 不报错。过期语义不在这一层：expires_at
/// 只由 SessionManager 解释。
#[async_trait]
pub trait SessionTier: Send + Sync {
    async fn get(&self, token: &str) -> Result<Option<Session>, SessionError>;

    async fn put(&self, session: &Session) -> Result<(), SessionError>;

    async fn delete(&self, token: &str) -> Result<(), SessionError>;

    async fn exists(&self, token: &str) -> Result<bool, SessionError>;
}

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// 会话缓存数据模型，时间戳用 Unix 毫秒存储
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedSession {
    pub access_token: String,
    pub user_id: i64,
    pub user_agent: String,
    pub created_at: i64,
    pub expires_at: i64,
}

impl From<&Session> for CachedSession {
    fn from(session: &Session) -> Self {
        CachedSession {
            access_token: session.token.clone(),
            user_id: session.user_id,
            user_agent: session.user_agent.clone(),
            created_at: session.created_at.timestamp_millis(),
            expires_at: session.expires_at.timestamp_millis(),
        }
    }
}

impl CachedSession {
    /// 转回会话实体，时间戳非法时返回 None
    pub fn into_session(self) -> Option<Session> {
        Some(Session {
            token: self.access_token,
            user_id: self.user_id,
            user_agent: self.user_agent,
            created_at: DateTime::from_timestamp_millis(self.created_at)?,
            expires_at: DateTime::from_timestamp_millis(self.expires_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn session_survives_cache_model_round_trip() {
        let session = Session::issue(42, "test-agent", Duration::hours(24));
        let cached = CachedSession::from(&session);
        let restored = cached.into_session().unwrap();

        assert_eq!(restored.token, session.token);
        assert_eq!(restored.user_id, session.user_id);
        assert_eq!(restored.user_agent, session.user_agent);
        // 毫秒精度下时间戳一致
        assert_eq!(
            restored.expires_at.timestamp_millis(),
            session.expires_at.timestamp_millis()
        );
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 会话实体，token 在两层存储中都作为主键
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// 签发新会话：随机 token，过期时间 = 当前时间 + ttl，之后不再续期
    pub fn issue(user_id: i64, user_agent: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Session {
            token: Uuid::new_v4().to_string(),
            user_id,
            user_agent: user_agent.to_string(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// 距过期还剩的秒数，已过期时为 0
    pub fn remaining_secs(&self) -> u64 {
        (self.expires_at - Utc::now()).num_seconds().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_generates_unique_tokens() {
        let a = Session::issue(1, "agent", Duration::hours(24));
        let b = Session::issue(1, "agent", Duration::hours(24));
        assert!(!a.token.is_empty());
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn issue_sets_expiry_from_ttl() {
        let ttl = Duration::hours(24);
        let session = Session::issue(42, "test-agent", ttl);
        assert_eq!(session.expires_at, session.created_at + ttl);
        assert!(!session.is_expired());
        // 剩余时间接近 24 小时
        assert!(session.remaining_secs() > 24 * 3600 - 5);
    }

    #[test]
    fn expired_session_reports_zero_remaining() {
        let mut session = Session::issue(1, "agent", Duration::hours(1));
        session.expires_at = Utc::now() - Duration::seconds(10);
        assert!(session.is_expired());
        assert_eq!(session.remaining_secs(), 0);
    }
}

use std::sync::Arc;

use chrono::Duration;

use crate::session::model::Session;
use crate::session::store::{SessionError, SessionTier};

/// 会话管理器：cache-aside 读取、双写创建、惰性过期
///
/// 缓存层只是优化，持久层才是权威数据源。缓存读写失败都可以
/// 降级（记日志后继续），持久层写入失败才会导致操作失败。
/// 没有后台清理任务，过期只在访问时强制执行。
pub struct SessionManager {
    cache: Arc<dyn SessionTier>,
    store: Arc<dyn SessionTier>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(cache: Arc<dyn SessionTier>, store: Arc<dyn SessionTier>, ttl: Duration) -> Self {
        SessionManager { cache, store, ttl }
    }

    /// 校验 token 并返回对应会话
    ///
    /// 先查缓存，未命中再查持久层；持久层也没有则返回 NotFound。
    /// 查到的会话已过期时从两层删除后返回 NotFound。只在持久层
    /// 命中时回写缓存，回写失败不影响本次校验结果。
    pub async fn validate(&self, token: &str) -> Result<Session, SessionError> {
        let mut cached = true;

        // 缓存读取失败按未命中处理，由持久层兜底
        let session = match self.cache.get(token).await {
            Ok(Some(session)) => session,
            Ok(None) => {
                cached = false;
                self.store
                    .get(token)
                    .await?
                    .ok_or(SessionError::NotFound)?
            }
            Err(e) => {
                tracing::warn!("session cache read failed, falling back to store: {}", e);
                cached = false;
                self.store
                    .get(token)
                    .await?
                    .ok_or(SessionError::NotFound)?
            }
        };

        // 过期会话对调用方等同于不存在
        if session.is_expired() {
            self.purge(token).await;
            return Err(SessionError::NotFound);
        }

        if !cached {
            // 回写修复，让后续查询命中缓存
            if let Err(e) = self.cache.put(&session).await {
                tracing::warn!("session cache repair write failed: {}", e);
            }
        }

        Ok(session)
    }

    /// validate 的布尔形式，NotFound 映射为 false，瞬时错误照常上抛
    pub async fn exists_valid(&self, token: &str) -> Result<bool, SessionError> {
        match self.validate(token).await {
            Ok(_) => Ok(true),
            Err(SessionError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// 登录成功后签发新会话
    ///
    /// 先写缓存再写持久层，持久层写入是提交点：失败时回滚
    /// 已写入的缓存条目并让整个创建失败。
    pub async fn create(&self, user_id: i64, user_agent: &str) -> Result<Session, SessionError> {
        let session = Session::issue(user_id, user_agent, self.ttl);

        if let Err(e) = self.cache.put(&session).await {
            tracing::warn!("session cache write failed during create: {}", e);
        }

        if let Err(e) = self.store.put(&session).await {
            // 回滚缓存，避免只存在于缓存的孤儿会话
            if let Err(rollback) = self.cache.delete(&session.token).await {
                tracing::warn!("session cache rollback failed: {}", rollback);
            }
            return Err(e);
        }

        tracing::info!("session created for user {}", user_id);
        Ok(session)
    }

    /// 注销会话：两层都尝试删除，token 不存在时是空操作
    pub async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        let cache_result = self.cache.delete(token).await;
        let store_result = self.store.delete(token).await;

        store_result?;
        cache_result?;
        Ok(())
    }

    /// 尽力从两层清除过期会话，失败只记日志
    async fn purge(&self, token: &str) {
        if let Err(e) = self.cache.delete(token).await {
            tracing::warn!("failed to purge expired session from cache: {}", e);
        }
        if let Err(e) = self.store.delete(token).await {
            tracing::warn!("failed to purge expired session from store: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    /// 内存实现的存储层，两层共用
    #[derive(Default)]
    struct MemoryTier {
        entries: Mutex<HashMap<String, Session>>,
    }

    impl MemoryTier {
        fn insert(&self, session: Session) {
            self.entries
                .lock()
                .unwrap()
                .insert(session.token.clone(), session);
        }

        fn contains(&self, token: &str) -> bool {
            self.entries.lock().unwrap().contains_key(token)
        }
    }

    #[async_trait]
    impl SessionTier for MemoryTier {
        async fn get(&self, token: &str) -> Result<Option<Session>, SessionError> {
            Ok(self.entries.lock().unwrap().get(token).cloned())
        }

        async fn put(&self, session: &Session) -> Result<(), SessionError> {
            self.insert(session.clone());
            Ok(())
        }

        async fn delete(&self, token: &str) -> Result<(), SessionError> {
            self.entries.lock().unwrap().remove(token);
            Ok(())
        }

        async fn exists(&self, token: &str) -> Result<bool, SessionError> {
            Ok(self.contains(token))
        }
    }

    /// 所有操作都失败的存储层，模拟瞬时故障
    struct BrokenTier;

    fn broken_store_error() -> SessionError {
        SessionError::Store(sqlx::Error::PoolClosed)
    }

    #[async_trait]
    impl SessionTier for BrokenTier {
        async fn get(&self, _token: &str) -> Result<Option<Session>, SessionError> {
            Err(broken_store_error())
        }

        async fn put(&self, _session: &Session) -> Result<(), SessionError> {
            Err(broken_store_error())
        }

        async fn delete(&self, _token: &str) -> Result<(), SessionError> {
            Err(broken_store_error())
        }

        async fn exists(&self, _token: &str) -> Result<bool, SessionError> {
            Err(broken_store_error())
        }
    }

    fn manager_with_tiers() -> (Arc<SessionManager>, Arc<MemoryTier>, Arc<MemoryTier>) {
        let cache = Arc::new(MemoryTier::default());
        let store = Arc::new(MemoryTier::default());
        let manager = Arc::new(SessionManager::new(
            cache.clone(),
            store.clone(),
            Duration::hours(24),
        ));
        (manager, cache, store)
    }

    #[tokio::test]
    async fn create_then_validate_round_trips() {
        let (manager, _, _) = manager_with_tiers();

        let created = manager.create(42, "test-agent").await.unwrap();
        assert!(!created.token.is_empty());
        assert_eq!(created.user_id, 42);

        // 过期时间约等于 now + 24h
        let expected = Utc::now() + Duration::hours(24);
        assert!((created.expires_at - expected).num_seconds().abs() < 5);

        let validated = manager.validate(&created.token).await.unwrap();
        assert_eq!(validated.user_id, created.user_id);
        assert_eq!(validated.user_agent, created.user_agent);
        assert_eq!(validated.expires_at, created.expires_at);
    }

    #[tokio::test]
    async fn create_writes_both_tiers() {
        let (manager, cache, store) = manager_with_tiers();

        let session = manager.create(1, "agent").await.unwrap();
        assert!(cache.contains(&session.token));
        assert!(store.contains(&session.token));
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let (manager, _, _) = manager_with_tiers();

        let result = manager.validate("never-issued").await;
        assert!(matches!(result, Err(SessionError::NotFound)));
        assert!(!manager.exists_valid("never-issued").await.unwrap());
    }

    #[tokio::test]
    async fn expired_session_is_purged_from_both_tiers() {
        let (manager, cache, store) = manager_with_tiers();

        let mut session = Session::issue(7, "agent", Duration::hours(1));
        session.expires_at = Utc::now() - Duration::seconds(1);
        cache.insert(session.clone());
        store.insert(session.clone());

        let result = manager.validate(&session.token).await;
        assert!(matches!(result, Err(SessionError::NotFound)));
        assert!(!cache.contains(&session.token));
        assert!(!store.contains(&session.token));
    }

    #[tokio::test]
    async fn cache_miss_repairs_cache_from_store() {
        let (manager, cache, store) = manager_with_tiers();

        // 只写持久层，模拟缓存被清掉
        let session = Session::issue(3, "agent", Duration::hours(1));
        store.insert(session.clone());
        assert!(!cache.contains(&session.token));

        let validated = manager.validate(&session.token).await.unwrap();
        assert_eq!(validated, session);
        assert!(cache.exists(&session.token).await.unwrap());
    }

    #[tokio::test]
    async fn cache_read_error_falls_back_to_store() {
        let store = Arc::new(MemoryTier::default());
        let manager = SessionManager::new(Arc::new(BrokenTier), store.clone(), Duration::hours(24));

        let session = Session::issue(5, "agent", Duration::hours(1));
        store.insert(session.clone());

        let validated = manager.validate(&session.token).await.unwrap();
        assert_eq!(validated.user_id, 5);
    }

    #[tokio::test]
    async fn store_error_after_cache_miss_propagates() {
        let cache = Arc::new(MemoryTier::default());
        let manager = SessionManager::new(cache, Arc::new(BrokenTier), Duration::hours(24));

        let result = manager.validate("some-token").await;
        assert!(matches!(result, Err(SessionError::Store(_))));

        // exists_valid 不把瞬时错误吞成 false
        assert!(manager.exists_valid("some-token").await.is_err());
    }

    #[tokio::test]
    async fn create_rolls_back_cache_when_store_write_fails() {
        let cache = Arc::new(MemoryTier::default());
        let manager = SessionManager::new(cache.clone(), Arc::new(BrokenTier), Duration::hours(24));

        let result = manager.create(9, "agent").await;
        assert!(result.is_err());
        assert!(cache.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn revoke_removes_session_and_is_idempotent() {
        let (manager, cache, store) = manager_with_tiers();

        let session = manager.create(42, "test-agent").await.unwrap();
        manager.revoke(&session.token).await.unwrap();

        assert!(!cache.contains(&session.token));
        assert!(!store.contains(&session.token));
        let result = manager.validate(&session.token).await;
        assert!(matches!(result, Err(SessionError::NotFound)));

        // 重复注销不报错
        manager.revoke(&session.token).await.unwrap();
    }

    #[tokio::test]
    async fn revoke_clears_stale_cache_only_record() {
        let (manager, cache, _) = manager_with_tiers();

        // 缓存里残留一条持久层已不存在的记录
        let session = Session::issue(11, "agent", Duration::hours(1));
        cache.insert(session.clone());

        manager.revoke(&session.token).await.unwrap();
        assert!(!cache.contains(&session.token));
        assert!(matches!(
            manager.validate(&session.token).await,
            Err(SessionError::NotFound)
        ));
    }

    #[tokio::test]
    async fn concurrent_validates_return_identical_sessions() {
        let (manager, _, store) = manager_with_tiers();

        // 只放持久层，让所有并发调用都竞争回写
        let session = Session::issue(21, "agent", Duration::hours(1));
        store.insert(session.clone());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let manager = manager.clone();
            let token = session.token.clone();
            handles.push(tokio::spawn(
                async move { manager.validate(&token).await },
            ));
        }

        for handle in handles {
            let validated = handle.await.unwrap().unwrap();
            assert_eq!(validated, session);
        }
    }
}

use sqlx::PgPool;

use crate::database::models::user::UserEntity;
use crate::utils::hash_password;

/// 用户存储库实现
pub struct UserRepository;

impl UserRepository {
    /// 创建用户，密码入库前先做 bcrypt 哈希
    pub async fn create(
        pool: &PgPool,
        email: &str,
        nickname: &str,
        password: &str,
    ) -> Result<UserEntity, sqlx::Error> {
        let password_hash = hash_password(password)
            .map_err(|e| sqlx::Error::Protocol(format!("Failed to hash password: {}", e)))?;

        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (email, nickname, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, nickname, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(nickname)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// 根据邮箱查找用户
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, email, nickname, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}

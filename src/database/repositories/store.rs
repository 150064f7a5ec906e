use sqlx::PgPool;

use crate::database::models::store::StoreEntity;

/// 门店存储库实现
pub struct StoreRepository;

impl StoreRepository {
    /// 按名称模糊查找门店
    pub async fn find_by_name_like(
        pool: &PgPool,
        name: &str,
    ) -> Result<Vec<StoreEntity>, sqlx::Error> {
        let stores = sqlx::query_as::<_, StoreEntity>(
            r#"
            SELECT id, name, address, created_at
            FROM stores
            WHERE name ILIKE $1
            ORDER BY name
            "#,
        )
        .bind(format!("%{}%", name))
        .fetch_all(pool)
        .await?;

        Ok(stores)
    }

    pub async fn create(
        pool: &PgPool,
        name: &str,
        address: &str,
    ) -> Result<StoreEntity, sqlx::Error> {
        let store = sqlx::query_as::<_, StoreEntity>(
            r#"
            INSERT INTO stores (name, address)
            VALUES ($1, $2)
            RETURNING id, name, address, created_at
            "#,
        )
        .bind(name)
        .bind(address)
        .fetch_one(pool)
        .await?;

        Ok(store)
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: &str,
        address: &str,
    ) -> Result<Option<StoreEntity>, sqlx::Error> {
        let store = sqlx::query_as::<_, StoreEntity>(
            r#"
            UPDATE stores
            SET name = $1, address = $2
            WHERE id = $3
            RETURNING id, name, address, created_at
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(store)
    }

    /// 删除门店，返回是否真的删掉了一行
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

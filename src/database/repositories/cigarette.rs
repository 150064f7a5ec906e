use sqlx::PgPool;

use crate::database::models::cigarette::CigaretteOnListEntity;

/// 列表内香烟的排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CigaretteOrder {
    /// 货架陈列顺序
    Display,
    /// 收银系统顺序
    Computerized,
}

/// 香烟列表存储库实现
pub struct CigaretteOnListRepository;

impl CigaretteOnListRepository {
    /// 按指定顺序取出某个列表上的全部香烟
    pub async fn find_all_by_list(
        pool: &PgPool,
        cigarette_list_id: i64,
        order: CigaretteOrder,
    ) -> Result<Vec<CigaretteOnListEntity>, sqlx::Error> {
        // 排序列只能来自这两个固定字符串，不拼接用户输入
        let sql = match order {
            CigaretteOrder::Display => {
                r#"
                SELECT id, cigarette_list_id, official_name, display_order, computerized_order, count
                FROM cigarette_on_list
                WHERE cigarette_list_id = $1
                ORDER BY display_order
                "#
            }
            CigaretteOrder::Computerized => {
                r#"
                SELECT id, cigarette_list_id, official_name, display_order, computerized_order, count
                FROM cigarette_on_list
                WHERE cigarette_list_id = $1
                ORDER BY computerized_order
                "#
            }
        };

        let cigarettes = sqlx::query_as::<_, CigaretteOnListEntity>(sql)
            .bind(cigarette_list_id)
            .fetch_all(pool)
            .await?;

        Ok(cigarettes)
    }
}

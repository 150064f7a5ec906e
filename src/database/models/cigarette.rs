use serde::Serialize;
use sqlx::FromRow;

/// cigarette_on_list 表实体，一条记录是某个香烟列表上的一种香烟
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CigaretteOnListEntity {
    pub id: i64,
    pub cigarette_list_id: i64,
    pub official_name: String,
    /// 货架陈列顺序
    pub display_order: i32,
    /// 收银系统顺序
    pub computerized_order: i32,
    pub count: i32,
}

use serde::{Deserialize, Serialize};

use crate::database::models::cigarette::CigaretteOnListEntity;
use crate::database::repositories::cigarette::CigaretteOrder;

#[derive(Debug, Deserialize)]
pub struct FindOnListQuery {
    /// 缺省按货架陈列顺序
    pub order: Option<CigaretteOrder>,
}

#[derive(Debug, Serialize)]
pub struct CigaretteListResponse {
    pub cigarettes: Vec<CigaretteOnListEntity>,
}

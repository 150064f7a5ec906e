use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    database::repositories::cigarette::{CigaretteOnListRepository, CigaretteOrder},
    utils::{error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{CigaretteListResponse, FindOnListQuery};

#[axum::debug_handler]
pub async fn find_on_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Query(query): Query<FindOnListQuery>,
) -> impl IntoResponse {
    let order = query.order.unwrap_or(CigaretteOrder::Display);

    match CigaretteOnListRepository::find_all_by_list(&state.pool, list_id, order).await {
        Ok(cigarettes) => (
            StatusCode::OK,
            success_to_api_response(CigaretteListResponse { cigarettes }),
        ),
        Err(_) => (
            StatusCode::OK,
            error_to_api_response(error_codes::INTERNAL_ERROR, "查询香烟列表失败".to_string()),
        ),
    }
}

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    database::repositories::store::StoreRepository,
    utils::{error_codes, error_to_api_response, success_to_api_response},
};

use super::model::{
    AddStoreRequest, DeleteStoreResponse, FindStoreQuery, StoreListResponse, UpdateStoreRequest,
};

#[axum::debug_handler]
pub async fn find_by_name(
    State(state): State<AppState>,
    Query(query): Query<FindStoreQuery>,
) -> impl IntoResponse {
    match StoreRepository::find_by_name_like(&state.pool, &query.name).await {
        Ok(stores) => (
            StatusCode::OK,
            success_to_api_response(StoreListResponse { stores }),
        ),
        Err(_) => (
            StatusCode::OK,
            error_to_api_response(error_codes::INTERNAL_ERROR, "查询门店失败".to_string()),
        ),
    }
}

#[axum::debug_handler]
pub async fn add_store(
    State(state): State<AppState>,
    Json(req): Json<AddStoreRequest>,
) -> impl IntoResponse {
    if req.name.is_empty() {
        return (
            StatusCode::OK,
            error_to_api_response(error_codes::VALIDATION_ERROR, "门店名称不能为空".to_string()),
        );
    }

    match StoreRepository::create(&state.pool, &req.name, &req.address).await {
        Ok(store) => (StatusCode::OK, success_to_api_response(store)),
        Err(_) => (
            StatusCode::OK,
            error_to_api_response(error_codes::INTERNAL_ERROR, "创建门店失败".to_string()),
        ),
    }
}

#[axum::debug_handler]
pub async fn update_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStoreRequest>,
) -> impl IntoResponse {
    match StoreRepository::update(&state.pool, id, &req.name, &req.address).await {
        Ok(Some(store)) => (StatusCode::OK, success_to_api_response(store)),
        Ok(None) => (
            StatusCode::OK,
            error_to_api_response(error_codes::NOT_FOUND, "门店不存在".to_string()),
        ),
        Err(_) => (
            StatusCode::OK,
            error_to_api_response(error_codes::INTERNAL_ERROR, "更新门店失败".to_string()),
        ),
    }
}

#[axum::debug_handler]
pub async fn delete_store(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match StoreRepository::delete(&state.pool, id).await {
        // 删除幂等，不存在的门店也返回成功
        Ok(_) => (
            StatusCode::OK,
            success_to_api_response(DeleteStoreResponse { id }),
        ),
        Err(_) => (
            StatusCode::OK,
            error_to_api_response(error_codes::INTERNAL_ERROR, "删除门店失败".to_string()),
        ),
    }
}

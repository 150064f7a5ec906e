use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::session::SessionError;
use crate::utils::{error_codes, error_to_api_response};

/// HTTP 边界的错误类型，会话层错误在这里映射成响应
#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    InternalServerError,
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            // 不存在和过期对外一律是未认证，不泄露 token 是否存在过
            SessionError::NotFound => AppError::Unauthorized,
            SessionError::Cache(_) | SessionError::Store(_) => {
                tracing::error!("session storage failure: {}", e);
                AppError::InternalServerError
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, msg) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                error_codes::AUTH_FAILED,
                "未授权访问".to_string(),
            ),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "内部服务器错误".to_string(),
            ),
        };

        (status, error_to_api_response::<()>(code, msg)).into_response()
    }
}

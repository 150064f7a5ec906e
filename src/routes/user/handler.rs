use axum::{
    extract::{Extension, Json, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    database::repositories::user::UserRepository,
    session::Session,
    utils::{error_codes, error_to_api_response, success_to_api_response, verify_password},
};

use super::model::{
    AmILoggedInResponse, LoginRequest, LoginResponse, LogoutResponse, RegisterRequest,
    RegisterResponse,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    // 基本格式检查
    if !req.email.contains('@') {
        return (
            StatusCode::OK,
            error_to_api_response(error_codes::VALIDATION_ERROR, "邮箱格式无效".to_string()),
        );
    }
    if req.password.len() < 6 || req.password.len() > 24 {
        return (
            StatusCode::OK,
            error_to_api_response(
                error_codes::VALIDATION_ERROR,
                "密码长度必须在6到24个字符之间".to_string(),
            ),
        );
    }

    match UserRepository::create(&state.pool, &req.email, &req.nickname, &req.password).await {
        Ok(user) => (
            StatusCode::OK,
            success_to_api_response(RegisterResponse {
                id: user.id,
                email: user.email,
                nickname: user.nickname,
            }),
        ),
        Err(e) => {
            if e.to_string().contains("unique constraint") {
                (
                    StatusCode::OK,
                    error_to_api_response(error_codes::USER_EXISTS, "用户已存在".to_string()),
                )
            } else {
                (
                    StatusCode::OK,
                    error_to_api_response(error_codes::INTERNAL_ERROR, "创建用户失败".to_string()),
                )
            }
        }
    }
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let user = match UserRepository::find_by_email(&state.pool, &req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::AUTH_FAILED, "邮箱或密码错误".to_string()),
            );
        }
        Err(_) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "数据库错误".to_string()),
            );
        }
    };

    // 验证密码
    match verify_password(&req.pw, &user.password_hash) {
        Ok(true) => (),
        Ok(false) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::AUTH_FAILED, "邮箱或密码错误".to_string()),
            );
        }
        Err(_) => {
            return (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "密码校验失败".to_string()),
            );
        }
    }

    // 记录客户端 User-Agent，一起写进会话
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown");

    match state.sessions.create(user.id, user_agent).await {
        Ok(session) => (
            StatusCode::OK,
            success_to_api_response(LoginResponse {
                user_id: user.id,
                nickname: user.nickname,
                access_token: session.token,
            }),
        ),
        Err(e) => {
            tracing::error!("failed to create session for user {}: {}", user.id, e);
            (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "创建会话失败".to_string()),
            )
        }
    }
}

/// 注销：撤销 Authorization 头里的 token，token 不存在也返回成功
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .unwrap_or("");

    if token.is_empty() {
        return (
            StatusCode::OK,
            error_to_api_response(error_codes::VALIDATION_ERROR, "缺少会话令牌".to_string()),
        );
    }

    match state.sessions.revoke(token).await {
        Ok(()) => (StatusCode::OK, success_to_api_response(LogoutResponse {})),
        Err(e) => {
            tracing::error!("failed to revoke session: {}", e);
            (
                StatusCode::OK,
                error_to_api_response(error_codes::INTERNAL_ERROR, "注销会话失败".to_string()),
            )
        }
    }
}

/// 认证检查端点，能进到这里说明中间件已经校验过会话
#[axum::debug_handler]
pub async fn am_i_logged_in(Extension(session): Extension<Session>) -> impl IntoResponse {
    (
        StatusCode::OK,
        success_to_api_response(AmILoggedInResponse {
            user_id: session.user_id,
        }),
    )
}

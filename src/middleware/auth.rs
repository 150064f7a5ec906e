use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::error::AppError;
use crate::session::SessionError;

/// 认证中间件
///
/// 从 Authorization 头取出会话 token 并校验，校验通过的会话
/// 放进请求扩展供处理函数使用。token 缺失、不存在或已过期都
/// 返回未授权，存储层故障返回服务器错误。
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty());

    let Some(token) = token else {
        return Err(AppError::Unauthorized);
    };

    match state.sessions.validate(token).await {
        Ok(session) => {
            request.extensions_mut().insert(session);
            Ok(next.run(request).await)
        }
        Err(SessionError::NotFound) => Err(AppError::Unauthorized),
        Err(e) => Err(AppError::from(e)),
    }
}

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use dambae_backend::{
    AppState,
    cache::RedisSessionCache,
    config::Config,
    database::PgSessionStore,
    middleware::{auth_middleware, log_errors},
    routes,
    session::SessionManager,
};
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 设置数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'dambae_backend';")
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");

    // 设置 Redis 客户端
    let redis_client =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");
    let redis_arc = Arc::new(redis_client);

    // 组装两层会话存储和管理器
    let session_cache = Arc::new(RedisSessionCache::new(redis_arc.clone()));
    let session_store = Arc::new(PgSessionStore::new(pool.clone()));
    let sessions = Arc::new(SessionManager::new(
        session_cache,
        session_store,
        config.session_ttl(),
    ));

    // 设置应用状态
    let state = AppState {
        pool,
        config: config.clone(),
        redis: redis_arc,
        sessions,
    };

    // 将路由分为公开路由和受保护路由
    let public_routes = Router::new()
        .route("/users/register", post(routes::user::register))
        .route("/login", post(routes::user::login))
        // 注销是幂等操作，不经过认证中间件
        .route("/logout", post(routes::user::logout));

    let protected_routes = Router::new()
        .route("/am-i-logged-in", get(routes::user::am_i_logged_in))
        // 门店路由
        .route(
            "/stores",
            get(routes::store::find_by_name).post(routes::store::add_store),
        )
        .route(
            "/stores/{id}",
            put(routes::store::update_store).delete(routes::store::delete_store),
        )
        // 香烟列表路由
        .route(
            "/cigarette-lists/{list_id}/cigarettes",
            get(routes::cigarette::find_on_list),
        )
        // 应用认证中间件
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // 创建基础路由
    let router = Router::new().nest(
        &config.api_base_uri.clone(),
        Router::new().merge(public_routes).merge(protected_routes),
    );

    // 添加日志中间件
    let router = router.layer(axum::middleware::from_fn(log_errors));

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(CorsLayer::permissive())
    };

    // 添加应用状态
    let app = router.with_state(state.clone());

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}

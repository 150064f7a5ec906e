// 会话模块
// 两层存储（Redis缓存 + Postgres持久层）之上的会话生命周期管理

pub mod manager;
pub mod model;
pub mod store;

// 重新导出常用类型，方便其他模块使用
pub use manager::SessionManager;
pub use model::Session;
pub use store::{SessionError, SessionTier};

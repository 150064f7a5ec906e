// 路由模块
// 每个领域一个子模块，handler 负责请求处理，model 负责请求/响应结构

pub mod cigarette;
pub mod store;
pub mod user;

pub mod cigarette;
pub mod session;
pub mod store;
pub mod user;

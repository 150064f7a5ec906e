mod handler;
mod model;

pub use handler::{am_i_logged_in, login, logout, register};

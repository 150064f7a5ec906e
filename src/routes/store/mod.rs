mod handler;
mod model;

pub use handler::{add_store, delete_store, find_by_name, update_store};

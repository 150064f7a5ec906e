mod handler;
mod model;

pub use handler::find_on_list;

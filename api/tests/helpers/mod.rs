pub mod app;

pub use app::get_json;

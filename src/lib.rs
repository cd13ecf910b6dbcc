pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod quotes;
pub mod state;
pub mod storage;
pub mod streak;
pub mod tasks;
pub mod tips;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{Store, resolve_data_dir};

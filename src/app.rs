use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/journey", get(handlers::get_journey))
        .route("/api/tasks", post(handlers::add_task))
        .route("/api/tasks/toggle", post(handlers::toggle_task))
        .route("/api/tasks/delete", post(handlers::delete_task))
        .route("/api/tasks/reorder", post(handlers::reorder_tasks))
        .route("/api/goals/adjust", post(handlers::adjust_goal))
        .route("/api/tip", get(handlers::get_tip))
        .route("/api/quote", get(handlers::get_quote))
        .with_state(state)
}

use crate::models::{
    AddTaskRequest, AdjustGoalRequest, DailyTip, JourneyRecord, JourneyResponse, Quote,
    ReorderRequest, TaskIdRequest,
};
use crate::quotes::{LOCAL_QUOTES, QUOTE_CATEGORY};
use crate::state::AppState;
use crate::streak::advance_day;
use crate::tasks;
use crate::tips::resolve_tip;
use crate::ui::render_index;
use axum::{
    Json,
    extract::State,
    response::Html,
};
use chrono::{Local, NaiveDate};
use tracing::{error, info};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Rolls the record to the current day before any read or mutation. SameDay
/// makes this idempotent; a server left running over midnight sees the next
/// request as a fresh visit.
async fn reconcile_and_flush(state: &AppState, record: &mut JourneyRecord) {
    let transition = advance_day(record, today());
    if transition.mutated() {
        info!("day rollover: {transition:?}, streak {}", record.streak);
        flush(state, record).await;
    }
}

/// Persistence failures are logged and dropped; the in-memory record stays
/// authoritative for the rest of the session.
async fn flush(state: &AppState, record: &JourneyRecord) {
    if let Err(err) = state.store.save_journey(record).await {
        error!("failed to persist journey: {err}");
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut record = state.journey.lock().await;
    reconcile_and_flush(&state, &mut record).await;
    Html(render_index(&record.last_visit_date, record.streak))
}

pub async fn get_journey(State(state): State<AppState>) -> Json<JourneyResponse> {
    let mut record = state.journey.lock().await;
    reconcile_and_flush(&state, &mut record).await;
    Json(JourneyResponse::from_record(&record))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Json<JourneyResponse> {
    let mut record = state.journey.lock().await;
    reconcile_and_flush(&state, &mut record).await;
    if tasks::add_task(&mut record, &payload.text, payload.category, today()) {
        flush(&state, &record).await;
    }
    Json(JourneyResponse::from_record(&record))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Json<JourneyResponse> {
    let mut record = state.journey.lock().await;
    reconcile_and_flush(&state, &mut record).await;
    if tasks::toggle_task(&mut record, &payload.id) {
        flush(&state, &record).await;
    }
    Json(JourneyResponse::from_record(&record))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Json<JourneyResponse> {
    let mut record = state.journey.lock().await;
    reconcile_and_flush(&state, &mut record).await;
    if tasks::delete_task(&mut record, &payload.id) {
        flush(&state, &record).await;
    }
    Json(JourneyResponse::from_record(&record))
}

pub async fn reorder_tasks(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Json<JourneyResponse> {
    let mut record = state.journey.lock().await;
    reconcile_and_flush(&state, &mut record).await;
    if tasks::reorder_tasks(&mut record, &payload.ids) {
        flush(&state, &record).await;
    }
    Json(JourneyResponse::from_record(&record))
}

pub async fn adjust_goal(
    State(state): State<AppState>,
    Json(payload): Json<AdjustGoalRequest>,
) -> Json<JourneyResponse> {
    let mut record = state.journey.lock().await;
    reconcile_and_flush(&state, &mut record).await;
    if tasks::adjust_goal_progress(&mut record, &payload.name, payload.delta, payload.progress) {
        flush(&state, &record).await;
    }
    Json(JourneyResponse::from_record(&record))
}

pub async fn get_tip(State(state): State<AppState>) -> Json<DailyTip> {
    Json(resolve_tip(&state.store, &state.quotes, today()).await)
}

/// Fresh on every request, unlike the tip: the "New Quote" button re-rolls.
pub async fn get_quote(State(state): State<AppState>) -> Json<Quote> {
    Json(state.quotes.fetch_or_fallback(QUOTE_CATEGORY, LOCAL_QUOTES).await)
}

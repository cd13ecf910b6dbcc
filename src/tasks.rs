use crate::models::{Category, JourneyRecord, Task, date_key};
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

/// Mutation helpers over the in-memory record. Each returns whether the
/// record changed; rejected input is a silent no-op, never an error.

pub fn add_task(
    record: &mut JourneyRecord,
    text: &str,
    category: Category,
    today: NaiveDate,
) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    record.todos.push(Task {
        id: Uuid::new_v4().to_string(),
        text: text.to_string(),
        completed: false,
        category,
        due_date: Some(date_key(today)),
    });
    true
}

pub fn toggle_task(record: &mut JourneyRecord, id: &str) -> bool {
    match record.todos.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

pub fn delete_task(record: &mut JourneyRecord, id: &str) -> bool {
    let before = record.todos.len();
    record.todos.retain(|task| task.id != id);
    record.todos.len() != before
}

/// Applies a user-chosen ordering. The new order must be a permutation of the
/// current id set; anything else (foreign id, duplicate, wrong count) leaves
/// the list untouched.
pub fn reorder_tasks(record: &mut JourneyRecord, ids: &[String]) -> bool {
    if ids.len() != record.todos.len() {
        return false;
    }
    let current: HashSet<&str> = record.todos.iter().map(|task| task.id.as_str()).collect();
    let requested: HashSet<&str> = ids.iter().map(String::as_str).collect();
    if requested.len() != ids.len() || requested != current {
        return false;
    }

    record.todos.sort_by_key(|task| {
        ids.iter()
            .position(|id| *id == task.id)
            .unwrap_or(usize::MAX)
    });
    true
}

/// Clamps to 0..=100 no matter what is requested. `delta` is relative to the
/// current progress; `absolute` replaces it. Unknown goal names are ignored.
pub fn adjust_goal_progress(
    record: &mut JourneyRecord,
    name: &str,
    delta: Option<i64>,
    absolute: Option<i64>,
) -> bool {
    let Some(goal) = record.goals.iter_mut().find(|goal| goal.name == name) else {
        return false;
    };
    let requested = match (delta, absolute) {
        (Some(delta), _) => i64::from(goal.progress) + delta,
        (None, Some(absolute)) => absolute,
        (None, None) => return false,
    };
    let clamped = requested.clamp(0, 100) as u8;
    if clamped == goal.progress {
        return false;
    }
    goal.progress = clamped;
    true
}

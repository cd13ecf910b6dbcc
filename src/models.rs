use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Formats a date the way it is stored and compared everywhere: `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Work,
    Health,
    Learning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub progress: u8,
    pub target: u32,
    pub color: String,
}

/// The single persisted document. Fields stay camelCase on disk so records
/// written by the old browser-only build load as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyRecord {
    pub last_visit_date: String,
    #[serde(default = "default_streak")]
    pub streak: u32,
    #[serde(default)]
    pub todos: Vec<Task>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

fn default_streak() -> u32 {
    1
}

impl JourneyRecord {
    /// First-ever visit: streak starts at 1 with the stock goal set.
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            last_visit_date: date_key(today),
            streak: 1,
            todos: Vec::new(),
            goals: default_goals(),
        }
    }
}

pub fn default_goals() -> Vec<Goal> {
    [
        ("Health", 65, "#FF8C69"),
        ("Career", 80, "#FF6B6B"),
        ("Learning", 45, "#FFA07A"),
        ("Mindfulness", 70, "#FFB6C1"),
    ]
    .into_iter()
    .map(|(name, progress, color)| Goal {
        name: name.to_string(),
        progress,
        target: 100,
        color: color.to_string(),
    })
    .collect()
}

/// Cached in its own document, keyed independently from the journey record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTip {
    pub text: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct TaskIdRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<String>,
}

/// Either a relative `delta` or an absolute `progress`; `delta` wins when both
/// are present. The result is clamped to 0..=100 either way.
#[derive(Debug, Deserialize)]
pub struct AdjustGoalRequest {
    pub name: String,
    #[serde(default)]
    pub delta: Option<i64>,
    #[serde(default)]
    pub progress: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResponse {
    pub date: String,
    pub streak: u32,
    pub todos: Vec<Task>,
    pub goals: Vec<Goal>,
}

impl JourneyResponse {
    pub fn from_record(record: &JourneyRecord) -> Self {
        Self {
            date: record.last_visit_date.clone(),
            streak: record.streak,
            todos: record.todos.clone(),
            goals: record.goals.clone(),
        }
    }
}

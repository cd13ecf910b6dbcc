use crate::models::{JourneyRecord, date_key};
use chrono::{Duration, NaiveDate};

/// Outcome of comparing the stored visit date against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTransition {
    NoPriorRecord,
    SameDay,
    ConsecutiveDay,
    GapDay,
}

impl DayTransition {
    /// SameDay is the only transition that leaves the record untouched.
    pub fn mutated(self) -> bool {
        !matches!(self, DayTransition::SameDay)
    }
}

/// Evaluates the once-per-visit day transition. Absent input (first visit,
/// or a store that failed to load) yields a fresh record with streak 1.
pub fn reconcile(
    stored: Option<JourneyRecord>,
    today: NaiveDate,
) -> (JourneyRecord, DayTransition) {
    match stored {
        None => (JourneyRecord::fresh(today), DayTransition::NoPriorRecord),
        Some(mut record) => {
            let transition = advance_day(&mut record, today);
            (record, transition)
        }
    }
}

/// Rolls an existing record forward to `today`.
///
/// The comparison is exact string equality against today's and yesterday's
/// date keys. A stored date that parses oddly or comes from some foreign
/// format matches neither and falls into the gap branch, which resets the
/// streak rather than miscounting it. Goals survive every transition; the
/// task list is per-day and clears on any rollover.
pub fn advance_day(record: &mut JourneyRecord, today: NaiveDate) -> DayTransition {
    let today_key = date_key(today);
    if record.last_visit_date == today_key {
        return DayTransition::SameDay;
    }

    let yesterday_key = date_key(today - Duration::days(1));
    let transition = if record.last_visit_date == yesterday_key {
        record.streak += 1;
        DayTransition::ConsecutiveDay
    } else {
        record.streak = 1;
        DayTransition::GapDay
    };

    record.todos.clear();
    record.last_visit_date = today_key;
    transition
}

use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};

pub const HOUR_MILLIS: i64 = 1000 * 60 * 60;
pub const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

/// Which unsent reminders a dispatch run should pick up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchMode {
    /// Everything due within the next hour. Meant to be triggered by a
    /// cron with a cadence of one hour or less so that no reminder can
    /// fall between two consecutive runs
    ScheduledBatch,
    /// Everything unsent, regardless of when it is due
    ManualFlush,
    /// Everything due before the end of the current UTC day
    TodayOrOverdue,
}

impl DispatchMode {
    /// Upper bound on `remind_at` for this mode, or `None` when every
    /// unsent reminder qualifies
    pub fn due_before(&self, now: i64) -> Option<i64> {
        match self {
            Self::ScheduledBatch => Some(now + HOUR_MILLIS),
            Self::ManualFlush => None,
            Self::TodayOrOverdue => {
                Some(now.div_euclid(DAY_MILLIS) * DAY_MILLIS + DAY_MILLIS - 1)
            }
        }
    }
}

/// Outcome of one reminder within a dispatch run. Failures are carried
/// in the report instead of aborting the run, one bad address must not
/// block everyone else's mail.
#[derive(Debug, Clone)]
pub enum DispatchResult {
    Sent {
        reminder_id: ID,
        email: String,
        event_name: String,
        message_id: String,
    },
    Failed {
        reminder_id: ID,
        error: String,
    },
}

impl DispatchResult {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    /// How many unsent reminders the run considered
    pub candidates: usize,
    pub sent: usize,
    pub failed: usize,
    pub results: Vec<DispatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1767276000000; // Thu Jan 01 2026 14:00:00 GMT+0000

    #[test]
    fn scheduled_batch_looks_one_hour_ahead() {
        assert_eq!(
            DispatchMode::ScheduledBatch.due_before(NOW),
            Some(NOW + HOUR_MILLIS)
        );
    }

    #[test]
    fn manual_flush_has_no_due_bound() {
        assert_eq!(DispatchMode::ManualFlush.due_before(NOW), None);
    }

    #[test]
    fn today_or_overdue_extends_to_end_of_utc_day() {
        let end_of_day = 1767311999999; // Thu Jan 01 2026 23:59:59.999 GMT+0000
        assert_eq!(DispatchMode::TodayOrOverdue.due_before(NOW), Some(end_of_day));

        // At midnight the whole day ahead is included
        let midnight = 1767225600000; // Thu Jan 01 2026 00:00:00 GMT+0000
        assert_eq!(
            DispatchMode::TodayOrOverdue.due_before(midnight),
            Some(end_of_day)
        );

        // In the last millisecond of the day the bound is that same millisecond
        assert_eq!(
            DispatchMode::TodayOrOverdue.due_before(end_of_day),
            Some(end_of_day)
        );
    }

    #[test]
    fn dispatch_mode_uses_kebab_case_on_the_wire() {
        let mode: DispatchMode = serde_json::from_str("\"scheduled-batch\"").unwrap();
        assert_eq!(mode, DispatchMode::ScheduledBatch);
        let mode: DispatchMode = serde_json::from_str("\"today-or-overdue\"").unwrap();
        assert_eq!(mode, DispatchMode::TodayOrOverdue);
        assert!(serde_json::from_str::<DispatchMode>("\"tomorrow\"").is_err());
    }
}

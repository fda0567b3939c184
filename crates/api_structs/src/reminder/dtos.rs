use festivo_domain::{Reminder, ReminderKind, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: String,
    pub event_id: Option<ID>,
    pub event_name: String,
    pub event_date: i64,
    pub reminder_type: ReminderKind,
    pub remind_at: i64,
    pub sent: bool,
    pub sent_at: Option<i64>,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            user_id: reminder.user_id,
            event_id: reminder.event_id,
            event_name: reminder.event_name,
            event_date: reminder.event_date,
            reminder_type: reminder.kind,
            remind_at: reminder.remind_at,
            sent: reminder.sent,
            sent_at: reminder.sent_at,
            email: reminder.email.to_string(),
            phone: reminder.phone,
            created_at: reminder.created,
            updated_at: reminder.updated,
        }
    }
}

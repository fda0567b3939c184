use crate::dtos::ReminderDTO;
use festivo_domain::{BatchReport, DispatchMode, DispatchResult, Reminder, ReminderKind, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
        pub phone: Option<String>,
        pub event_id: Option<ID>,
        pub event_name: Option<String>,
        pub event_date: Option<i64>,
        pub reminder_type: ReminderKind,
        pub remind_at: Option<i64>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod dispatch_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub mode: DispatchMode,
    }

    #[derive(Debug, Clone, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DispatchResultDTO {
        pub reminder_id: ID,
        pub sent: bool,
        pub email: Option<String>,
        pub event_name: Option<String>,
        pub message_id: Option<String>,
        pub error: Option<String>,
    }

    impl DispatchResultDTO {
        pub fn new(result: DispatchResult) -> Self {
            match result {
                DispatchResult::Sent {
                    reminder_id,
                    email,
                    event_name,
                    message_id,
                } => Self {
                    reminder_id,
                    sent: true,
                    email: Some(email),
                    event_name: Some(event_name),
                    message_id: Some(message_id),
                    error: None,
                },
                DispatchResult::Failed { reminder_id, error } => Self {
                    reminder_id,
                    sent: false,
                    email: None,
                    event_name: None,
                    message_id: None,
                    error: Some(error),
                },
            }
        }
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub results: Vec<DispatchResultDTO>,
    }

    impl APIResponse {
        pub fn new(report: BatchReport) -> Self {
            Self {
                success: true,
                message: format!(
                    "Sent {} of {} due reminders ({} failed)",
                    report.sent, report.candidates, report.failed
                ),
                results: report
                    .results
                    .into_iter()
                    .map(DispatchResultDTO::new)
                    .collect(),
            }
        }
    }
}

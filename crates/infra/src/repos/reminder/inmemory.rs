use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use festivo_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_all(&self) -> Vec<Reminder> {
        let mut reminders = find_by(&self.reminders, |_| true);
        reminders.sort_by_key(|reminder| reminder.remind_at);
        reminders
    }

    async fn find_unsent(&self, due_before: Option<i64>) -> anyhow::Result<Vec<Reminder>> {
        let mut due = find_by(&self.reminders, |reminder| {
            !reminder.sent
                && due_before
                    .map(|bound| reminder.remind_at <= bound)
                    .unwrap_or(true)
        });
        due.sort_by_key(|reminder| reminder.remind_at);
        Ok(due)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }
}

mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

use festivo_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_all(&self) -> Vec<Reminder>;
    /// Unsent reminders with `remind_at` at or before the given bound,
    /// ordered by `remind_at`. `None` means every unsent reminder.
    async fn find_unsent(&self, due_before: Option<i64>) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
}

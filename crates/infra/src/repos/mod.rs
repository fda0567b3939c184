mod conversation;
mod event;
mod reminder;
mod shared;
mod subscriber;

pub use conversation::{IConversationRepo, InMemoryConversationRepo, PostgresConversationRepo};
pub use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
pub use reminder::{IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use subscriber::{ISubscriberRepo, InMemorySubscriberRepo, PostgresSubscriberRepo};
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub conversations: Arc<dyn IConversationRepo>,
    pub subscribers: Arc<dyn ISubscriberRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            conversations: Arc::new(PostgresConversationRepo::new(pool.clone())),
            subscribers: Arc::new(PostgresSubscriberRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            conversations: Arc::new(InMemoryConversationRepo::new()),
            subscribers: Arc::new(InMemorySubscriberRepo::new()),
        }
    }
}

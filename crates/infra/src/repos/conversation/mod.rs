mod inmemory;
mod postgres;

pub use inmemory::InMemoryConversationRepo;
pub use postgres::PostgresConversationRepo;

use festivo_domain::{Conversation, ID};

#[async_trait::async_trait]
pub trait IConversationRepo: Send + Sync {
    async fn insert(&self, conversation: &Conversation) -> anyhow::Result<()>;
    async fn save(&self, conversation: &Conversation) -> anyhow::Result<()>;
    async fn find(&self, conversation_id: &ID) -> Option<Conversation>;
    async fn find_all(&self) -> Vec<Conversation>;
    /// Active conversations whose last activity is strictly before the
    /// given timestamp
    async fn find_inactive(&self, active_before: i64) -> anyhow::Result<Vec<Conversation>>;
    /// Closes every given conversation in one sweep, recording the
    /// close timestamp and reason
    async fn close_many(&self, ids: &[ID], closed_at: i64, reason: &str) -> anyhow::Result<()>;
}

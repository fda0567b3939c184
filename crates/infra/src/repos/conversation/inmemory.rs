use super::IConversationRepo;
use crate::repos::shared::inmemory_repo::*;
use festivo_domain::{Conversation, Entity, ID};

pub struct InMemoryConversationRepo {
    conversations: std::sync::Mutex<Vec<Conversation>>,
}

impl InMemoryConversationRepo {
    pub fn new() -> Self {
        Self {
            conversations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IConversationRepo for InMemoryConversationRepo {
    async fn insert(&self, conversation: &Conversation) -> anyhow::Result<()> {
        insert(conversation, &self.conversations);
        Ok(())
    }

    async fn save(&self, conversation: &Conversation) -> anyhow::Result<()> {
        save(conversation, &self.conversations);
        Ok(())
    }

    async fn find(&self, conversation_id: &ID) -> Option<Conversation> {
        find(conversation_id, &self.conversations)
    }

    async fn find_all(&self) -> Vec<Conversation> {
        let mut conversations = find_by(&self.conversations, |_| true);
        conversations.sort_by_key(|conversation| std::cmp::Reverse(conversation.last_activity));
        conversations
    }

    async fn find_inactive(&self, active_before: i64) -> anyhow::Result<Vec<Conversation>> {
        Ok(find_by(&self.conversations, |conversation| {
            conversation.is_active() && conversation.last_activity < active_before
        }))
    }

    async fn close_many(&self, ids: &[ID], closed_at: i64, reason: &str) -> anyhow::Result<()> {
        update_many(
            &self.conversations,
            |conversation| ids.contains(conversation.id()),
            |conversation| conversation.close(reason, closed_at),
        );
        Ok(())
    }
}

use festivo_domain::{Conversation, ConversationStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDTO {
    pub id: ID,
    pub status: ConversationStatus,
    pub last_activity: i64,
    pub closed_at: Option<i64>,
    pub closed_reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ConversationDTO {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            id: conversation.id,
            status: conversation.status,
            last_activity: conversation.last_activity,
            closed_at: conversation.closed_at,
            closed_reason: conversation.closed_reason,
            created_at: conversation.created,
            updated_at: conversation.updated,
        }
    }
}

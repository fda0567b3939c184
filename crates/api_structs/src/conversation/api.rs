use crate::dtos::ConversationDTO;
use festivo_domain::{Conversation, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub conversation: ConversationDTO,
}

impl ConversationResponse {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            conversation: ConversationDTO::new(conversation),
        }
    }
}

pub mod get_conversations {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub conversations: Vec<ConversationDTO>,
    }

    impl APIResponse {
        pub fn new(conversations: Vec<Conversation>) -> Self {
            Self {
                conversations: conversations.into_iter().map(ConversationDTO::new).collect(),
            }
        }
    }
}

pub mod close_conversation {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub conversation_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub reason: Option<String>,
    }

    pub type APIResponse = ConversationResponse;
}

pub mod auto_close_conversations {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub closed: usize,
        pub conversation_ids: Vec<ID>,
    }

    impl APIResponse {
        pub fn new(conversation_ids: Vec<ID>) -> Self {
            Self {
                message: format!("Closed {} inactive conversations", conversation_ids.len()),
                closed: conversation_ids.len(),
                conversation_ids,
            }
        }
    }
}

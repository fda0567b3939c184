use festivo_domain::{NewsletterSubscriber, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberDTO {
    pub id: ID,
    pub email: String,
    pub name: Option<String>,
    pub created_at: i64,
}

impl SubscriberDTO {
    pub fn new(subscriber: NewsletterSubscriber) -> Self {
        Self {
            id: subscriber.id,
            email: subscriber.email.to_string(),
            name: subscriber.name,
            created_at: subscriber.created,
        }
    }
}

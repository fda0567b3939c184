use crate::dtos::SubscriberDTO;
use festivo_domain::NewsletterSubscriber;
use serde::{Deserialize, Serialize};

pub mod subscribe_newsletter {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
        pub name: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub subscriber: SubscriberDTO,
    }

    impl APIResponse {
        pub fn new(subscriber: NewsletterSubscriber) -> Self {
            Self {
                subscriber: SubscriberDTO::new(subscriber),
            }
        }
    }
}

pub mod unsubscribe_newsletter {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
    }
}

pub mod broadcast_newsletter {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub subject: String,
        pub html: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub recipients: usize,
        pub failed: usize,
    }

    impl APIResponse {
        pub fn new(recipients: usize, failed: usize) -> Self {
            Self {
                message: format!(
                    "Newsletter sent to {} subscribers ({} failed)",
                    recipients, failed
                ),
                recipients,
                failed,
            }
        }
    }
}

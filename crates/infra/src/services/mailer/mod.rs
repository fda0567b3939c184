mod http;
mod inmemory;
mod noop;

pub use http::HttpMailer;
pub use inmemory::InMemoryMailer;
pub use noop::NoopMailer;

use crate::config::Config;
use std::sync::Arc;
use tracing::warn;

/// An email ready for delivery
#[derive(Debug, Clone)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Returned by a mailer when the provider accepted a mail
#[derive(Debug, Clone)]
pub struct MailReceipt {
    pub message_id: String,
}

#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send(&self, mail: &Mail) -> anyhow::Result<MailReceipt>;
}

pub fn create_mailer(config: &Config) -> Arc<dyn IMailer> {
    match (&config.mail_api_url, &config.mail_api_key) {
        (Some(api_url), Some(api_key)) => Arc::new(HttpMailer::new(
            api_url.clone(),
            api_key.clone(),
            config.mail_from.clone(),
        )),
        _ => {
            warn!("MAIL_API_URL and MAIL_API_KEY are not both set. Outgoing mail will be logged and dropped.");
            Arc::new(NoopMailer::new())
        }
    }
}

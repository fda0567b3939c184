use super::{IMailer, Mail, MailReceipt};
use festivo_utils::create_random_secret;
use tracing::info;

/// Used when no mail provider is configured. Every mail is accepted,
/// logged and dropped, which keeps local development credential-free.
pub struct NoopMailer {}

impl NoopMailer {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl IMailer for NoopMailer {
    async fn send(&self, mail: &Mail) -> anyhow::Result<MailReceipt> {
        info!(
            "Mail to: {} with subject: {} was dropped, no mail provider is configured",
            mail.to, mail.subject
        );
        Ok(MailReceipt {
            message_id: format!("noop-{}", create_random_secret(12)),
        })
    }
}

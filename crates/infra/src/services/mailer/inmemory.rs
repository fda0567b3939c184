use super::{IMailer, Mail, MailReceipt};
use festivo_utils::create_random_secret;
use std::sync::Mutex;

/// Test mailer that records every accepted mail and can be told to
/// reject given recipients
pub struct InMemoryMailer {
    sent: Mutex<Vec<Mail>>,
    failing: Mutex<Vec<String>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: Mutex::new(Vec::new()),
        }
    }

    /// Every mail to this recipient will fail from now on
    pub fn fail_for(&self, recipient: &str) {
        self.failing.lock().unwrap().push(recipient.to_string());
    }

    pub fn outbox(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, mail: &Mail) -> anyhow::Result<MailReceipt> {
        if self.failing.lock().unwrap().contains(&mail.to) {
            anyhow::bail!("Mail provider rejected recipient: {}", mail.to);
        }
        self.sent.lock().unwrap().push(mail.clone());
        Ok(MailReceipt {
            message_id: format!("test-{}", create_random_secret(12)),
        })
    }
}

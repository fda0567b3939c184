use super::{IMailer, Mail, MailReceipt};
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

/// Delivers mail through the transactional mail provider's HTTP API
pub struct HttpMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    pub fn new(api_url: String, api_key: String, from: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            from,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendMailResponse {
    message_id: String,
}

#[async_trait::async_trait]
impl IMailer for HttpMailer {
    async fn send(&self, mail: &Mail) -> anyhow::Result<MailReceipt> {
        let body = serde_json::json!({
            "from": self.from,
            "to": mail.to,
            "subject": mail.subject,
            "html": mail.html,
        });
        match self
            .client
            .post(&self.api_url)
            .header("authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
        {
            Ok(res) => match res.error_for_status() {
                Ok(res) => res
                    .json::<SendMailResponse>()
                    .await
                    .map(|res| MailReceipt {
                        message_id: res.message_id,
                    })
                    .map_err(|e| {
                        error!(
                            "[Unexpected Response] Mail API send error. Error message: {:?}",
                            e
                        );
                        anyhow::Error::new(e)
                    }),
                Err(e) => {
                    error!(
                        "[Unexpected Response] Mail API rejected mail to: {}. Error message: {:?}",
                        mail.to, e
                    );
                    Err(anyhow::Error::new(e))
                }
            },
            Err(e) => {
                error!(
                    "[Network Error] Mail API send error. Error message: {:?}",
                    e
                );
                Err(anyhow::Error::new(e))
            }
        }
    }
}

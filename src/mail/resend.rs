use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{MailError, MailTransport, OutgoingEmail};

/// Delivers through the Resend HTTP API.
#[derive(Clone)]
pub struct ResendTransport {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    from_address: String,
}

impl ResendTransport {
    pub fn new(base_url: String, api_key: Option<String>, from_address: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            from_address,
        }
    }
}

#[async_trait]
impl MailTransport for ResendTransport {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        #[derive(Serialize)]
        struct Payload<'a> {
            from: String,
            to: [&'a str; 1],
            subject: &'a str,
            text: &'a str,
        }

        let api_key = self.api_key.as_deref().ok_or(MailError::MissingCredentials)?;

        let payload = Payload {
            from: format!("\"{}\" <{}>", email.from_name.replace('"', "'"), self.from_address),
            to: [email.to.as_str()],
            subject: &email.subject,
            text: &email.text,
        };

        let res = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailError::Http(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

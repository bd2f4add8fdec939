use async_trait::async_trait;

use super::{MailError, MailTransport, OutgoingEmail};

/// Writes messages to the log instead of delivering them. Local development only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tracing::info!(
            from_name = %email.from_name,
            to = %email.to,
            subject = %email.subject,
            "Mail (not delivered):\n{}",
            email.text
        );
        Ok(())
    }
}

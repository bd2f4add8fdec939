pub mod log;
pub mod memory;
pub mod resend;
pub mod smtp;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, TransportKind};

pub use self::log::LogTransport;
pub use memory::MemoryTransport;
pub use resend::ResendTransport;
pub use smtp::SmtpTransport;

/// A plain-text message ready to hand to a transport.
///
/// Only the sender's display name is set here; the sender address always
/// belongs to the transport's own account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail credentials are not configured")]
    MissingCredentials,

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Mail provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Outbound mail delivery.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Short name used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Build the transport selected by `MAIL_TRANSPORT`.
pub fn transport_from_config(config: &Config) -> Result<Arc<dyn MailTransport>, MailError> {
    let transport: Arc<dyn MailTransport> = match config.transport {
        TransportKind::Smtp => Arc::new(SmtpTransport::new(
            &config.smtp_host,
            config.smtp_port,
            config.smtp_user.clone(),
            config.smtp_pass.clone(),
        )?),
        TransportKind::Resend => Arc::new(ResendTransport::new(
            config.resend_api_url.clone(),
            config.resend_api_key.clone(),
            config.mail_from.clone(),
        )),
        TransportKind::Log => Arc::new(LogTransport),
    };

    Ok(transport)
}

//! SMTP delivery through an authenticated account (Gmail by default).

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailError, MailTransport, OutgoingEmail};

pub struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
    account: Option<(String, String)>,
}

impl SmtpTransport {
    /// The connection pool is built lazily by lettre, so nothing here talks to
    /// the server. Missing credentials are kept as `None` and surface on send.
    pub fn new(
        host: &str,
        port: u16,
        user: Option<String>,
        pass: Option<String>,
    ) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(port);

        let account = user.zip(pass);
        if let Some((user, pass)) = &account {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            inner: builder.build(),
            account,
        })
    }

    fn build_message(&self, sender: &str, email: &OutgoingEmail) -> Result<Message, MailError> {
        let from_addr: Address = sender
            .parse()
            .map_err(|_| MailError::InvalidAddress(sender.to_string()))?;
        let to_addr: Address = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        Message::builder()
            .from(Mailbox::new(Some(email.from_name.clone()), from_addr))
            .to(Mailbox::new(None, to_addr))
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.text.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let (sender, _) = self.account.as_ref().ok_or(MailError::MissingCredentials)?;
        let message = self.build_message(sender, email)?;

        self.inner
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from_name: "boss@co.com via FormFill".to_string(),
            to: to.to_string(),
            subject: "Thanks for contacting boss@co.com".to_string(),
            text: "Hi Ana".to_string(),
        }
    }

    fn transport(user: Option<&str>) -> SmtpTransport {
        SmtpTransport::new(
            "smtp.example.com",
            465,
            user.map(str::to_string),
            Some("secret".to_string()),
        )
        .expect("relay builder")
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_at_send_time() {
        let transport = transport(None);
        let err = transport.send(&email("ana@x.com")).await.unwrap_err();
        assert!(matches!(err, MailError::MissingCredentials));
    }

    #[test]
    fn test_message_uses_display_name_and_account_address() {
        let transport = transport(Some("relay@gmail.com"));
        let message = transport
            .build_message("relay@gmail.com", &email("ana@x.com"))
            .expect("message");

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("relay@gmail.com"));
        assert!(raw.contains("via FormFill"));
        assert!(raw.contains("To: ana@x.com"));
    }

    #[test]
    fn test_invalid_recipient() {
        let transport = transport(Some("relay@gmail.com"));
        let err = transport
            .build_message("relay@gmail.com", &email("not-an-email"))
            .unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(addr) if addr == "not-an-email"));
    }
}

use std::env;
use std::path::PathBuf;

/// Which outbound mail transport the relay uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Smtp,
    Resend,
    Log,
}

impl TransportKind {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "smtp" => Ok(TransportKind::Smtp),
            "resend" => Ok(TransportKind::Resend),
            "log" => Ok(TransportKind::Log),
            other => Err(ConfigError::UnknownTransport(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub public_dir: PathBuf,
    pub public_base_url: String,
    pub transport: TransportKind,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub mail_from: String,
    pub log_json: bool,
}

impl Config {
    /// Mail credentials are optional here: a relay without them still starts
    /// and reports the problem when it first tries to send.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let server_port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", server_port));
        reqwest::Url::parse(&public_base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(public_base_url.clone()))?;

        Ok(Config {
            server_host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port,
            public_dir: env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            transport: TransportKind::parse(
                &env::var("MAIL_TRANSPORT").unwrap_or_else(|_| "smtp".to_string()),
            )?,
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "465".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            smtp_user: non_empty_var("SMTP_USER"),
            smtp_pass: non_empty_var("SMTP_PASS"),
            resend_api_key: non_empty_var("RESEND_API_KEY"),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "onboarding@resend.dev".to_string()),
            log_json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port")]
    InvalidPort,
    #[error("Unknown MAIL_TRANSPORT '{0}' (expected smtp, resend or log)")]
    UnknownTransport(String),
    #[error("PUBLIC_BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_kind_parse() {
        assert_eq!(TransportKind::parse("smtp").unwrap(), TransportKind::Smtp);
        assert_eq!(TransportKind::parse(" Resend ").unwrap(), TransportKind::Resend);
        assert_eq!(TransportKind::parse("LOG").unwrap(), TransportKind::Log);
        assert!(matches!(
            TransportKind::parse("carrier-pigeon"),
            Err(ConfigError::UnknownTransport(name)) if name == "carrier-pigeon"
        ));
    }
}

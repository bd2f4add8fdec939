use std::sync::Mutex;

use async_trait::async_trait;

use super::{MailError, MailTransport, OutgoingEmail};

/// Records every send attempt in memory. Used as the fake transport in tests.
///
/// `failing_on(n)` makes the n-th attempt (1-based) fail; the failed attempt
/// is still recorded.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    attempts: Mutex<Vec<OutgoingEmail>>,
    fail_on: Option<usize>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(attempt: usize) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail_on: Some(attempt),
        }
    }

    /// Every message handed to `send`, in order, including the failed one.
    pub fn attempts(&self) -> Vec<OutgoingEmail> {
        self.attempts
            .lock()
            .map(|a| a.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MailTransport for MemoryTransport {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let attempt = {
            let mut attempts = self
                .attempts
                .lock()
                .map_err(|_| MailError::Smtp("memory transport poisoned".to_string()))?;
            attempts.push(email.clone());
            attempts.len()
        };

        if self.fail_on == Some(attempt) {
            return Err(MailError::Smtp(format!("simulated failure on send #{}", attempt)));
        }
        Ok(())
    }
}

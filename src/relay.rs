//! Turning one submission into two outbound messages.
//!
//! The relay runs as a two-step saga: notify the creator, then acknowledge the
//! submitter. Each step's outcome is captured separately in a [`RelayReport`].
//! A failed step stops the saga, so the acknowledgment is skipped when the
//! notification fails. Nothing is compensated: if the acknowledgment fails
//! after the notification went out, the creator has already been mailed.

use crate::mail::{MailError, MailTransport, OutgoingEmail};
use crate::models::Submission;

pub const BOT_NAME: &str = "FormFill Bot";
pub const PRODUCT_NAME: &str = "FormFill";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStep {
    CreatorNotification,
    SubmitterAcknowledgment,
}

impl RelayStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayStep::CreatorNotification => "creator_notification",
            RelayStep::SubmitterAcknowledgment => "submitter_acknowledgment",
        }
    }
}

#[derive(Debug)]
pub enum StepOutcome {
    Sent,
    Failed(MailError),
    Skipped,
}

impl StepOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, StepOutcome::Sent)
    }
}

#[derive(Debug)]
pub struct RelayReport {
    pub notification: StepOutcome,
    pub acknowledgment: StepOutcome,
}

impl RelayReport {
    pub fn is_success(&self) -> bool {
        self.notification.is_sent() && self.acknowledgment.is_sent()
    }

    /// The first failed step, if any.
    pub fn into_failure(self) -> Option<(RelayStep, MailError)> {
        match (self.notification, self.acknowledgment) {
            (StepOutcome::Failed(e), _) => Some((RelayStep::CreatorNotification, e)),
            (_, StepOutcome::Failed(e)) => Some((RelayStep::SubmitterAcknowledgment, e)),
            _ => None,
        }
    }
}

/// Message to the creator carrying the submitter's details.
pub fn creator_notification(submission: &Submission) -> OutgoingEmail {
    OutgoingEmail {
        from_name: BOT_NAME.to_string(),
        to: submission.creator.clone(),
        subject: format!("New Form Submission from {}", submission.name),
        text: format!(
            "You have received a new message:\n\nFrom: {} ({})\n\nMessage:\n{}",
            submission.name, submission.email, submission.message
        ),
    }
}

/// Receipt to the submitter, sent in the creator's name.
pub fn submitter_acknowledgment(submission: &Submission) -> OutgoingEmail {
    OutgoingEmail {
        from_name: format!("{} via {}", submission.creator, PRODUCT_NAME),
        to: submission.email.clone(),
        subject: format!("Thanks for contacting {}", submission.creator),
        text: format!(
            "Hi {},\n\nThank you for your message:\n\"{}\"\n\nWe’ll be in touch soon.\n\n- {}",
            submission.name, submission.message, submission.creator
        ),
    }
}

/// Run both steps in order against `transport`.
pub async fn relay_submission(transport: &dyn MailTransport, submission: &Submission) -> RelayReport {
    let notification = match transport.send(&creator_notification(submission)).await {
        Ok(()) => StepOutcome::Sent,
        Err(e) => StepOutcome::Failed(e),
    };

    if !notification.is_sent() {
        return RelayReport {
            notification,
            acknowledgment: StepOutcome::Skipped,
        };
    }

    let acknowledgment = match transport.send(&submitter_acknowledgment(submission)).await {
        Ok(()) => StepOutcome::Sent,
        Err(e) => StepOutcome::Failed(e),
    };

    RelayReport {
        notification,
        acknowledgment,
    }
}

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::post, Json, Router};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Submission, SubmissionRequest, SubmitResponse};
use crate::relay::relay_submission;
use crate::state::AppState;

pub fn submit_routes() -> Router<AppState> {
    Router::new().route("/submit-form", post(submit_form))
}

/// POST /submit-form - Relay a submission to its creator and acknowledge it
#[tracing::instrument(
    name = "Relaying a form submission",
    skip(state, payload),
    fields(
        submission_id = %Uuid::new_v4(),
        transport = state.transport.name(),
        creator = tracing::field::Empty
    )
)]
async fn submit_form(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>> {
    let Json(request) = payload?;
    let submission = Submission::parse(request)?;
    tracing::Span::current().record("creator", tracing::field::display(&submission.creator));

    let report = relay_submission(state.transport.as_ref(), &submission).await;
    if let Some((step, err)) = report.into_failure() {
        tracing::error!(step = step.as_str(), error = %err, "Email sending failed");
        return Err(AppError::MailDelivery(err));
    }

    tracing::info!("Submission relayed");

    Ok(Json(SubmitResponse {
        success: true,
        message: "Emails sent successfully".to_string(),
    }))
}

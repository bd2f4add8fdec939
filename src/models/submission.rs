use serde::{Deserialize, Serialize};

use crate::error::{AppError, MISSING_FIELDS};

/// Body of `POST /submit-form` as it arrives on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
}

/// A submission with all four fields present. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub creator: String,
}

impl Submission {
    /// Presence check only: absent and empty are both missing. The email
    /// fields are not re-checked for shape here.
    pub fn parse(request: SubmissionRequest) -> Result<Self, AppError> {
        fn present(field: Option<String>) -> Result<String, AppError> {
            field
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS.to_string()))
        }

        Ok(Self {
            name: present(request.name)?,
            email: present(request.email)?,
            message: present(request.message)?,
            creator: present(request.creator)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> SubmissionRequest {
        SubmissionRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@x.com".to_string()),
            message: Some("Hi".to_string()),
            creator: Some("boss@co.com".to_string()),
        }
    }

    #[test]
    fn test_parse_complete_submission() {
        let submission = Submission::parse(full()).expect("complete submission");
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.creator, "boss@co.com");
    }

    #[test]
    fn test_parse_rejects_absent_or_empty_fields() {
        let cases: Vec<(&str, SubmissionRequest)> = vec![
            ("no name", SubmissionRequest { name: None, ..full() }),
            ("empty email", SubmissionRequest { email: Some(String::new()), ..full() }),
            ("no message", SubmissionRequest { message: None, ..full() }),
            ("empty creator", SubmissionRequest { creator: Some(String::new()), ..full() }),
            ("nothing", SubmissionRequest::default()),
        ];

        for (label, request) in cases {
            let err = Submission::parse(request).unwrap_err();
            assert!(
                matches!(&err, AppError::BadRequest(msg) if msg == "Missing required fields"),
                "{label}: unexpected {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_does_not_check_email_shape() {
        let request = SubmissionRequest {
            email: Some("not-an-email".to_string()),
            ..full()
        };
        assert!(Submission::parse(request).is_ok());
    }
}

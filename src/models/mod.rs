pub mod form_link;
pub mod submission;

pub use form_link::{FormLinkQuery, FormLinkResponse};
pub use submission::{Submission, SubmissionRequest, SubmitResponse};

use serde::{Deserialize, Serialize};

/// Query of `GET /api/form-link`.
#[derive(Debug, Deserialize)]
pub struct FormLinkQuery {
    #[serde(default)]
    pub creator: Option<String>,
}

/// Shareable link to a creator's form.
#[derive(Debug, Serialize)]
pub struct FormLinkResponse {
    pub creator: String,
    pub url: String,
}

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use reqwest::Url;

use crate::error::{AppError, Result, INVALID_EMAIL};
use crate::models::{FormLinkQuery, FormLinkResponse};
use crate::state::AppState;
use crate::validation::is_email_shaped;

pub fn form_link_routes() -> Router<AppState> {
    Router::new().route("/form-link", get(get_form_link))
}

/// Shareable URL of the form view for `creator`.
pub fn build_form_link(base_url: &str, creator: &str) -> Result<String> {
    let mut url = Url::parse(&format!("{}/form.html", base_url.trim_end_matches('/')))
        .map_err(|e| AppError::InternalError(format!("Invalid base URL: {}", e)))?;
    url.query_pairs_mut().append_pair("creator", creator);
    Ok(url.into())
}

/// GET /api/form-link?creator=... - Build the link a creator shares
async fn get_form_link(
    State(state): State<AppState>,
    Query(query): Query<FormLinkQuery>,
) -> Result<Json<FormLinkResponse>> {
    let creator = query
        .creator
        .as_deref()
        .map(str::trim)
        .filter(|c| is_email_shaped(c))
        .ok_or_else(|| AppError::BadRequest(INVALID_EMAIL.to_string()))?
        .to_string();

    let url = build_form_link(&state.config.public_base_url, &creator)?;

    Ok(Json(FormLinkResponse { creator, url }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_form_link_encodes_creator() {
        let url = build_form_link("https://formfill.dev/", "boss+team@co.com").unwrap();
        assert_eq!(url, "https://formfill.dev/form.html?creator=boss%2Bteam%40co.com");
    }

    #[test]
    fn test_build_form_link_rejects_bad_base() {
        assert!(matches!(
            build_form_link("not a url", "a@b.co"),
            Err(AppError::InternalError(_))
        ));
    }
}

pub mod form_link;
pub mod health;
pub mod submit;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Create the router: the relay endpoint, the helper API, and the form client's
/// static files with `index.html` as the fallback for unmatched paths.
pub fn create_router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();
    let client = ServeDir::new(&public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    Router::new()
        .merge(submit::submit_routes())
        .nest("/api", api_routes())
        .merge(health::health_routes())
        .with_state(state)
        .fallback_service(client)
}

fn api_routes() -> Router<AppState> {
    form_link::form_link_routes()
}

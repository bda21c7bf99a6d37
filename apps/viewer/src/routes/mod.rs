pub mod health;
pub mod page;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// `/` is the rendered page; anything that isn't a route is served from the
/// site directory, which is where the loader's candidate files live.
pub fn build_router(state: AppState) -> Router {
    let site = ServeDir::new(&state.config.site_dir);

    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(page::handle_get_resume))
        .fallback_service(site)
        .with_state(state)
}

use reqwest::Url;

use crate::config::Config;
use crate::loader::Loader;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub loader: Loader,
    /// Page URL the loader resolves candidates against. Parsed once from
    /// `SITE_ORIGIN` at startup.
    pub base_url: Url,
}

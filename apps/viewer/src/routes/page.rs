use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::config::Diagnostics;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::page::{bootstrap, PageOutcome, PageRequest};
use crate::render::dom::Document;
use crate::render::{render_resume, resolve_theme_id, Theme};
use crate::state::AppState;

#[derive(Debug, Default, PartialEq)]
pub struct PageQuery {
    pub theme: Option<String>,
    pub debug: Option<String>,
    pub log: Option<String>,
}

impl PageQuery {
    /// Repeated keys keep their first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "theme" => &mut query.theme,
                "debug" => &mut query.debug,
                "log" => &mut query.log,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    fn into_request(self, state: &AppState) -> PageRequest {
        PageRequest {
            base: state.base_url.clone(),
            diagnostics: Diagnostics::from_query(self.debug.as_deref(), self.log.as_deref()),
            theme: self.theme,
        }
    }
}

#[derive(Serialize)]
pub struct ResumeResponse {
    pub source: String,
    pub theme: &'static str,
    pub resume: Resume,
    /// Rendered `#resume` contents for the resolved theme.
    pub html: String,
}

/// GET /
/// Runs the load-then-render bootstrap and returns the whole page. The page is
/// served with 200 either way; the notice element signals missing data.
pub async fn handle_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let request = PageQuery::from_pairs(pairs).into_request(&state);
    let mut document = Document::new();
    let outcome = bootstrap(
        &state.loader,
        &state.config.default_theme,
        &mut document,
        &request,
    )
    .await;

    match &outcome {
        PageOutcome::Rendered { source, theme } => {
            debug!(%source, theme = theme.id(), "Page rendered")
        }
        PageOutcome::NoData => debug!("Page rendered with no-data notice"),
        PageOutcome::RenderFailed => debug!("Page rendered with notice after render failure"),
    }
    Html(document.to_html())
}

/// GET /api/v1/resume
/// The loaded record after normalization, with the theme it resolves to.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ResumeResponse>, AppError> {
    let request = PageQuery::from_pairs(pairs).into_request(&state);
    let loaded = state
        .loader
        .load(&request.base, request.diagnostics)
        .await
        .ok_or_else(|| AppError::NotFound("No resume data found".to_string()))?;

    let theme = Theme::from_id(resolve_theme_id(
        loaded.resume.theme.as_deref(),
        request.theme.as_deref(),
        &state.config.default_theme,
    ));
    let html = render_resume(&loaded.resume, theme)?.to_html();

    Ok(Json(ResumeResponse {
        source: loaded.source.to_string(),
        theme: theme.id(),
        resume: loaded.resume,
        html,
    }))
}

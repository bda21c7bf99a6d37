//! Page bootstrap: one load-then-render pass per page request.

use reqwest::Url;
use tracing::{info, warn};

use crate::config::Diagnostics;
use crate::loader::Loader;
use crate::render::dom::Document;
use crate::render::{render_into, resolve_theme_id, Theme};

/// Inputs for one page load.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// URL of the page; relative candidates resolve against it.
    pub base: Url,
    /// `?theme=` override, used only when the record has no theme of its own.
    pub theme: Option<String>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Rendered { source: Url, theme: Theme },
    NoData,
    RenderFailed,
}

/// Loads the résumé and renders it into `document`.
///
/// Exhausted candidates and render failures both end with an empty root and
/// the notice visible; a partially rendered page is never left behind.
pub async fn bootstrap(
    loader: &Loader,
    default_theme: &str,
    document: &mut Document,
    request: &PageRequest,
) -> PageOutcome {
    let Some(loaded) = loader.load(&request.base, request.diagnostics).await else {
        document.clear_root();
        document.show_notice();
        return PageOutcome::NoData;
    };

    let theme_id = resolve_theme_id(
        loaded.resume.theme.as_deref(),
        request.theme.as_deref(),
        default_theme,
    );
    let theme = Theme::from_id(theme_id);

    match render_into(document, &loaded.resume, theme) {
        Ok(()) => {
            document.hide_notice();
            if let Some(name) = &loaded.resume.name {
                document.set_title(name.clone());
            }
            if request.diagnostics.verbose {
                info!(source = %loaded.source, theme = theme.id(), "Rendered resume");
            }
            PageOutcome::Rendered {
                source: loaded.source,
                theme,
            }
        }
        Err(e) => {
            warn!(source = %loaded.source, error = %e, "Resume render failed");
            document.clear_root();
            document.show_notice();
            PageOutcome::RenderFailed
        }
    }
}

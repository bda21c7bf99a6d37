//! Résumé loader: walks a fixed candidate list and returns the first file that
//! fetches, parses and normalizes cleanly.
//!
//! Attempts run strictly one after another. Every per-candidate failure is a
//! [`LoadError`] that gets logged and dropped; only total exhaustion reaches
//! the caller, as `None`.

use std::sync::Arc;

use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Diagnostics;
use crate::models::normalize::normalize_resume;
use crate::models::resume::Resume;

pub mod fetch;
pub mod parse;

pub use fetch::{Fetcher, HttpFetcher};
use parse::parse_document;

/// Candidate paths in preference order. Relative entries resolve against the
/// page URL, root-relative ones against its origin.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "resume.json",
    "resume.yaml",
    "resume.yml",
    "/resume.json",
    "/resume.yaml",
    "/resume.yml",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid candidate URL: {0}")]
    Url(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no parser for '{0}'")]
    UnsupportedFormat(String),

    #[error("document is not a mapping")]
    NotAMapping,
}

/// A successfully loaded résumé and the URL it came from.
#[derive(Debug, Clone)]
pub struct LoadedResume {
    pub source: Url,
    pub resume: Resume,
}

#[derive(Clone)]
pub struct Loader {
    fetcher: Arc<dyn Fetcher>,
    candidates: Vec<String>,
}

impl Loader {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replaces the candidate list. Order is preserved as given.
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Returns the first candidate that loads, or `None` when all of them fail.
    pub async fn load(&self, base: &Url, diagnostics: Diagnostics) -> Option<LoadedResume> {
        for path in &self.candidates {
            match self.try_candidate(base, path).await {
                Ok(loaded) => {
                    if diagnostics.verbose {
                        info!(candidate = %loaded.source, "Loaded resume");
                    } else {
                        debug!(candidate = %loaded.source, "Loaded resume");
                    }
                    return Some(loaded);
                }
                Err(e) => {
                    if diagnostics.verbose {
                        warn!(candidate = %path, error = %e, "Resume candidate failed");
                    } else {
                        debug!(candidate = %path, error = %e, "Resume candidate failed");
                    }
                }
            }
        }

        if diagnostics.verbose {
            warn!(
                tried = self.candidates.len(),
                "No resume candidate could be loaded"
            );
        }
        None
    }

    async fn try_candidate(&self, base: &Url, path: &str) -> Result<LoadedResume, LoadError> {
        let url = base
            .join(path)
            .map_err(|e| LoadError::Url(format!("{path}: {e}")))?;

        let body = self.fetcher.fetch(&url).await?;
        let doc = parse_document(path, &body)?;
        let resume = normalize_resume(&doc).ok_or(LoadError::NotAMapping)?;

        Ok(LoadedResume {
            source: url,
            resume,
        })
    }
}

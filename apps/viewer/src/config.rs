use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::render::DEFAULT_THEME_ID;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory served as the page's origin; holds `resume.json` / `resume.yaml`.
    pub site_dir: PathBuf,
    /// Base URL the loader resolves candidate paths against.
    pub site_origin: String,
    /// Theme used when neither the record nor the query names one.
    pub default_theme: String,
    pub fetch_timeout: Duration,
    /// Overrides the loader's candidate list when set (`RESUME_CANDIDATES`,
    /// comma-separated, tried in order).
    pub candidates: Option<Vec<String>>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            port,
            site_dir: PathBuf::from(std::env::var("SITE_DIR").unwrap_or_else(|_| "site".into())),
            site_origin: std::env::var("SITE_ORIGIN")
                .unwrap_or_else(|_| format!("http://127.0.0.1:{port}/")),
            default_theme: std::env::var("DEFAULT_THEME")
                .unwrap_or_else(|_| DEFAULT_THEME_ID.to_string()),
            fetch_timeout: Duration::from_secs(
                std::env::var("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse::<u64>()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            candidates: std::env::var("RESUME_CANDIDATES")
                .ok()
                .map(|v| parse_candidates(&v))
                .filter(|c| !c.is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Diagnostic verbosity for a single page load.
///
/// Built per request from the query string and handed to the loader;
/// nothing reads it from global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub verbose: bool,
}

impl Diagnostics {
    /// `debug` or `log` query values of `1`, `true`, `yes`, `on`, or an empty
    /// value (`?debug`) turn verbose output on.
    pub fn from_query(debug: Option<&str>, log: Option<&str>) -> Self {
        Self {
            verbose: debug.is_some_and(is_truthy) || log.is_some_and(is_truthy),
        }
    }
}

fn parse_candidates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes" | "on"
    )
}

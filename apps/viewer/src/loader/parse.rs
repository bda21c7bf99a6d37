use serde_json::Value;

use crate::loader::LoadError;

/// Structured-text format implied by a candidate's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFormat {
    Json,
    Yaml,
}

impl CandidateFormat {
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(CandidateFormat::Json),
            "yaml" | "yml" => Some(CandidateFormat::Yaml),
            _ => None,
        }
    }

    fn parse(self, body: &str) -> Result<Value, LoadError> {
        match self {
            CandidateFormat::Json => Ok(serde_json::from_str(body)?),
            CandidateFormat::Yaml => Ok(serde_yaml::from_str(body)?),
        }
    }
}

/// Parses a fetched body into an untyped document.
///
/// Bodies that look like JSON (`{` or `[` after trimming) are parsed strictly
/// as JSON whatever the extension. Anything else goes to the parser for the
/// candidate's extension.
pub fn parse_document(path: &str, body: &str) -> Result<Value, LoadError> {
    let body = body.trim_start_matches('\u{feff}').trim();

    if body.starts_with('{') || body.starts_with('[') {
        return Ok(serde_json::from_str(body)?);
    }

    let format = CandidateFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_string()))?;
    format.parse(body)
}

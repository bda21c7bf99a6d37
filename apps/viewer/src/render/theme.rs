pub const DEFAULT_THEME_ID: &str = "t1";

/// The three built-in layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// `t1`: single column, sections stacked top to bottom.
    #[default]
    Classic,
    /// `t2`: skills in an aside, everything else in a main column.
    Sidebar,
    /// `t3`: single column with one-line entries.
    Compact,
}

impl Theme {
    /// Maps an identifier onto a layout. Unknown ids fall back to [`Theme::Classic`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "t2" => Theme::Sidebar,
            "t3" => Theme::Compact,
            _ => Theme::Classic,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Theme::Classic => "t1",
            Theme::Sidebar => "t2",
            Theme::Compact => "t3",
        }
    }

    pub fn is_two_column(self) -> bool {
        matches!(self, Theme::Sidebar)
    }

    /// Whether job and school entries collapse onto a single line.
    pub fn inline_entries(self) -> bool {
        matches!(self, Theme::Compact)
    }
}

/// Picks the theme id: the record's own field, then the query override, then
/// the configured default. Blank values count as absent.
pub fn resolve_theme_id<'a>(
    record_theme: Option<&'a str>,
    query_theme: Option<&'a str>,
    default_id: &'a str,
) -> &'a str {
    [record_theme, query_theme]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|id| !id.is_empty())
        .unwrap_or(default_id)
}

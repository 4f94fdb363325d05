//! Page title extraction.

use std::sync::LazyLock;

use regex::Regex;

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^# .+").unwrap());

/// Error returned when a document has no extractable title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    /// No line carried a top-level heading.
    #[error("no h1 header found in markdown")]
    NoTitleFound,
}

/// Extract the first top-level heading's text as the page title.
///
/// Scans lines in order; the first one matching `# ` plus content yields its
/// text with the marker and surrounding whitespace stripped.
///
/// # Errors
///
/// Returns [`TitleError::NoTitleFound`] if no line matches.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    for line in markdown.split('\n') {
        if H1_RE.is_match(line) {
            return Ok(line[1..].trim().to_owned());
        }
    }
    Err(TitleError::NoTitleFound)
}

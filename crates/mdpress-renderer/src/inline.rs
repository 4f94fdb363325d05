//! Inline span splitting.
//!
//! Turns a flat run of text into an ordered sequence of typed [`TextSpan`]s
//! by a fixed pipeline of passes: image extraction, link extraction, then
//! delimiter splitting for bold, italic, and code. Each pass consumes the
//! previous pass's full output; spans that are no longer [`SpanKind::Plain`]
//! pass through later stages untouched.

use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

// The regex crate has no lookbehind; matches preceded by `!` are skipped at
// the call site instead.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Error returned when inline markup cannot be split.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A styling delimiter appeared an odd number of times.
    #[error("unmatched delimiter '{delimiter}' in text: {text}")]
    UnmatchedDelimiter {
        /// The delimiter that was left open.
        delimiter: String,
        /// The text that contained it.
        text: String,
    },
}

/// The closed set of inline span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Unstyled text.
    Plain,
    /// Bold (`**`) text.
    Bold,
    /// Italic (`_`) text.
    Italic,
    /// Inline code (`` ` ``) text.
    Code,
    /// Hyperlink; `target` holds the URL.
    Link,
    /// Image; `target` holds the source URL.
    Image,
}

/// A typed fragment of inline content.
///
/// `target` is set if and only if `kind` is [`SpanKind::Link`] or
/// [`SpanKind::Image`]. Spans are immutable; the converter consumes them
/// directly into node-tree leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Text content (the label, for links and images).
    pub content: String,
    /// Span kind.
    pub kind: SpanKind,
    /// URL for links and images, `None` otherwise.
    pub target: Option<String>,
}

impl TextSpan {
    /// Create a plain text span.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, SpanKind::Plain)
    }

    /// Create a span of the given kind with no target.
    #[must_use]
    pub fn styled(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    /// Create a link or image span with its target URL.
    #[must_use]
    pub fn linked(content: impl Into<String>, kind: SpanKind, target: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind,
            target: Some(target.into()),
        }
    }
}

/// Extract all `![label](url)` image markers from `text` in order.
#[must_use]
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}

/// Extract all `[label](url)` link markers from `text` in order.
///
/// Image markers (`![...]`) are not reported as links.
#[must_use]
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| !preceded_by_bang(text, caps.get(0).map_or(0, |m| m.start())))
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}

fn preceded_by_bang(text: &str, start: usize) -> bool {
    start > 0 && text.as_bytes()[start - 1] == b'!'
}

/// Split plain spans around `![label](url)` image markers.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_with_pattern(spans, &IMAGE_RE, SpanKind::Image)
}

/// Split plain spans around `[label](url)` link markers.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_with_pattern(spans, &LINK_RE, SpanKind::Link)
}

/// Split plain spans around every marker matched by `re`.
///
/// For each match, in order of appearance, the preceding plain run is emitted
/// (if non-empty), then one span of `kind` carrying the label and URL. A
/// trailing remainder is emitted as plain if non-empty. Spans without matches
/// pass through unchanged.
fn split_with_pattern(spans: Vec<TextSpan>, re: &Regex, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let matches: Vec<(usize, usize, String, String)> = re
            .captures_iter(&span.content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                if kind == SpanKind::Link && preceded_by_bang(&span.content, whole.start()) {
                    return None;
                }
                Some((
                    whole.start(),
                    whole.end(),
                    caps[1].to_owned(),
                    caps[2].to_owned(),
                ))
            })
            .collect();
        if matches.is_empty() {
            out.push(span);
            continue;
        }
        let mut cursor = 0;
        for (start, end, label, url) in matches {
            let before = &span.content[cursor..start];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(TextSpan::linked(label, kind, url));
            cursor = end;
        }
        let after = &span.content[cursor..];
        if !after.is_empty() {
            out.push(TextSpan::plain(after));
        }
    }
    out
}

/// Split plain spans on every literal occurrence of `delimiter`.
///
/// Parts at even index stay plain, parts at odd index become `kind`; empty
/// parts are dropped. Spans that are not plain pass through unchanged.
///
/// # Errors
///
/// Returns [`ParseError::UnmatchedDelimiter`] if a span splits into an even
/// number of parts, which means a delimiter was left unclosed.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let parts: Vec<String> = span.content.split(delimiter).map(str::to_owned).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.to_owned(),
                text: span.content,
            });
        }
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::styled(part, kind));
            }
        }
    }
    Ok(out)
}

/// Split a text run into typed spans with the full inline pipeline.
///
/// Passes run in a fixed order: images, links, bold (`**`), italic (`_`),
/// code (`` ` ``).
///
/// # Errors
///
/// Returns [`ParseError::UnmatchedDelimiter`] if any styling delimiter is
/// left unclosed.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    split_delimiter(spans, "`", SpanKind::Code)
}

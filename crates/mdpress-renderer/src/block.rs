//! Block segmentation and classification.
//!
//! Segmentation splits a whole document on blank-line runs and reassembles
//! each chunk into block strings. Classification is an independent pass that
//! derives a [`BlockKind`] from a block's raw text alone, so a block emitted
//! by [`split_blocks`] re-segments to itself.

use std::sync::LazyLock;

use regex::Regex;

/// Triple-backtick code fence delimiter.
const FENCE: &str = "```";

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} .+").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. ").unwrap());

/// Structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#`-prefixed heading, levels 1-6.
    Heading,
    /// `- `-prefixed list.
    UnorderedList,
    /// `N. `-prefixed list.
    OrderedList,
    /// Fenced code block.
    CodeFence,
    /// `>`-prefixed quote.
    Quote,
    /// Anything else.
    Paragraph,
}

/// Split a document into block strings on blank-line separators.
///
/// Each chunk is trimmed and its lines are individually trimmed with blank
/// lines dropped, then reassembled: fenced chunks stay whole with their
/// internal formatting intact, homogeneous list/quote chunks rejoin with
/// newlines, and a chunk that mixes a `#` line into other content is split
/// line by line. Empty and whitespace-only input yields no blocks.
#[must_use]
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let trimmed = markdown.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    for raw in BLANK_RUN_RE.split(trimmed) {
        let chunk = raw.trim();
        if chunk.is_empty() {
            continue;
        }

        let clean: Vec<&str> = chunk
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if clean.is_empty() {
            continue;
        }

        if chunk.starts_with(FENCE) && chunk.ends_with(FENCE) {
            blocks.push(chunk.to_owned());
        } else if clean.iter().all(|line| line.starts_with("- ")) {
            blocks.push(clean.join("\n"));
        } else if clean.iter().all(|line| ORDERED_ITEM_RE.is_match(line)) {
            blocks.push(clean.join("\n"));
        } else if clean.iter().all(|line| line.starts_with('>')) {
            blocks.push(clean.join("\n"));
        } else if clean.len() == 1 {
            blocks.push(clean[0].to_owned());
        } else if clean.iter().any(|line| line.starts_with('#')) {
            // A heading marker mixed into paragraph-like content splits the
            // chunk line by line.
            blocks.extend(clean.iter().map(|line| (*line).to_owned()));
        } else {
            blocks.push(clean.join("\n"));
        }
    }
    blocks
}

/// Classify a block's structural kind from its raw text.
#[must_use]
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    if HEADING_RE.is_match(block) {
        BlockKind::Heading
    } else if block.starts_with("- ") && lines.iter().all(|line| line.starts_with("- ")) {
        BlockKind::UnorderedList
    } else if ORDERED_ITEM_RE.is_match(block)
        && lines.iter().all(|line| ORDERED_ITEM_RE.is_match(line))
    {
        BlockKind::OrderedList
    } else if block.starts_with(FENCE) && block.ends_with(FENCE) {
        BlockKind::CodeFence
    } else if block.starts_with('>') && lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else {
        BlockKind::Paragraph
    }
}

/// Length of the `N. ` marker on an ordered-list line, if present.
pub(crate) fn ordered_marker_len(line: &str) -> Option<usize> {
    ORDERED_ITEM_RE.find(line).map(|m| m.end())
}

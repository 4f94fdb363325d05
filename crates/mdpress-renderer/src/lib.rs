//! Markdown to HTML node-tree conversion.
//!
//! This crate is the conversion core of mdpress: pure functions over
//! in-memory strings and trees, with no I/O. A document flows through the
//! pipeline as raw text → block segmentation and classification → per-block
//! conversion (with inline span splitting) → a single [`HtmlNode`] tree →
//! rendered HTML string.
//!
//! Conversions are self-contained and share no state, so callers may convert
//! documents in parallel at file granularity.
//!
//! # Example
//!
//! ```
//! use mdpress_renderer::markdown_to_node;
//!
//! let node = markdown_to_node("# Hello\n\nThis is **bold**.").unwrap();
//! let html = node.render().unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>This is <b>bold</b>.</p></div>");
//! ```

mod block;
mod convert;
mod inline;
mod node;
mod title;

pub use block::{BlockKind, classify, split_blocks};
pub use convert::{markdown_to_node, span_to_node};
pub use inline::{
    ParseError, SpanKind, TextSpan, extract_images, extract_links, split_delimiter, split_images,
    split_links, text_to_spans,
};
pub use node::{AttrList, HtmlNode, RenderError};
pub use title::{TitleError, extract_title};

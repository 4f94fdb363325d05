//! Block-to-node conversion.
//!
//! Maps classified blocks, together with their inline spans, into node-tree
//! fragments, and assembles whole documents under a root `div` parent.

use crate::block::{self, BlockKind};
use crate::inline::{self, ParseError, SpanKind, TextSpan};
use crate::node::HtmlNode;

/// Convert a single inline span into its leaf node.
#[must_use]
pub fn span_to_node(span: TextSpan) -> HtmlNode {
    match span.kind {
        SpanKind::Plain => HtmlNode::text(span.content),
        SpanKind::Bold => HtmlNode::leaf("b", span.content),
        SpanKind::Italic => HtmlNode::leaf("i", span.content),
        SpanKind::Code => HtmlNode::leaf("code", span.content),
        SpanKind::Link => {
            let href = span.target.unwrap_or_default();
            HtmlNode::leaf_with_attrs("a", span.content, vec![("href".to_owned(), href)])
        }
        SpanKind::Image => {
            let src = span.target.unwrap_or_default();
            HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src".to_owned(), src), ("alt".to_owned(), span.content)],
            )
        }
    }
}

/// Split inline markup and convert each span to a leaf node.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(inline::text_to_spans(text)?
        .into_iter()
        .map(span_to_node)
        .collect())
}

/// Convert a heading block into an `h1`-`h6` parent.
fn heading_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let level = block.chars().take_while(|&c| c == '#').count();
    let text = block[level..].trim();
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

/// Convert a paragraph block into a `p` parent, folding newlines to spaces.
fn paragraph_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block.replace('\n', " ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

/// Convert a fenced block into a `pre` parent holding a `code` leaf.
///
/// The three fence characters are stripped from each end and one leading
/// newline is dropped if present. The remaining content is passed through
/// raw; inline markers keep their literal meaning inside a fence.
fn code_to_node(block: &str) -> HtmlNode {
    let inner = if block.len() >= 6 {
        &block[3..block.len() - 3]
    } else {
        ""
    };
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", inner)])
}

/// Convert a quote block into a `blockquote` parent.
///
/// Each line loses its `"> "` (or bare `">"`) marker, the lines are rejoined
/// with newlines, and the joined text is inline-split once.
fn quote_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block
        .split('\n')
        .map(|line| {
            line.strip_prefix("> ")
                .or_else(|| line.strip_prefix('>'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

/// Convert an unordered-list block into a `ul` parent of `li` items.
fn unordered_list_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        if let Some(rest) = line.strip_prefix("- ") {
            items.push(HtmlNode::parent("li", text_to_children(rest)?));
        }
    }
    Ok(HtmlNode::parent("ul", items))
}

/// Convert an ordered-list block into an `ol` parent of `li` items.
fn ordered_list_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        if let Some(marker_len) = block::ordered_marker_len(line) {
            items.push(HtmlNode::parent("li", text_to_children(&line[marker_len..])?));
        }
    }
    Ok(HtmlNode::parent("ol", items))
}

/// Convert a whole markdown document into its root node.
///
/// Every block is classified and converted in document order into a child of
/// one root `div` parent. A document with no blocks yields
/// [`HtmlNode::EmptyRoot`].
///
/// # Errors
///
/// Returns [`ParseError::UnmatchedDelimiter`] if any block's inline markup
/// leaves a delimiter unclosed. A failed block aborts the whole conversion.
pub fn markdown_to_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let mut children = Vec::new();
    for block in block::split_blocks(markdown) {
        let node = match block::classify(&block) {
            BlockKind::Heading => heading_to_node(&block)?,
            BlockKind::UnorderedList => unordered_list_to_node(&block)?,
            BlockKind::OrderedList => ordered_list_to_node(&block)?,
            BlockKind::CodeFence => code_to_node(&block),
            BlockKind::Quote => quote_to_node(&block)?,
            BlockKind::Paragraph => paragraph_to_node(&block)?,
        };
        children.push(node);
    }

    if children.is_empty() {
        return Ok(HtmlNode::EmptyRoot);
    }
    Ok(HtmlNode::parent("div", children))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn to_html(md: &str) -> String {
        markdown_to_node(md).unwrap().render().unwrap()
    }

    #[test]
    fn test_span_to_node_plain() {
        let node = span_to_node(TextSpan::plain("This is a text node"));
        assert_eq!(node.render().unwrap(), "This is a text node");
    }

    #[test]
    fn test_span_to_node_styled() {
        let bold = span_to_node(TextSpan::styled("This is a bold node", SpanKind::Bold));
        assert_eq!(bold.render().unwrap(), "<b>This is a bold node</b>");
        let italic = span_to_node(TextSpan::styled("This is an italic node", SpanKind::Italic));
        assert_eq!(italic.render().unwrap(), "<i>This is an italic node</i>");
        let code = span_to_node(TextSpan::styled("This is a code node", SpanKind::Code));
        assert_eq!(code.render().unwrap(), "<code>This is a code node</code>");
    }

    #[test]
    fn test_span_to_node_link() {
        let node = span_to_node(TextSpan::linked("the site", SpanKind::Link, "https://example.com"));
        assert_eq!(
            node.render().unwrap(),
            "<a href=\"https://example.com\">the site</a>"
        );
    }

    #[test]
    fn test_span_to_node_image_attr_order() {
        let node = span_to_node(TextSpan::linked("alt text", SpanKind::Image, "img.png"));
        assert_eq!(
            node.render().unwrap(),
            "<img src=\"img.png\"alt=\"alt text\"></img>"
        );
    }

    #[test]
    fn test_paragraphs() {
        let md = "\nThis is **bolded** paragraph\ntext in a p\ntag here\n\n\
                  This is another paragraph with _italic_ text and `code` here\n\n";
        assert_eq!(
            to_html(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p>\
             <p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_codeblock_keeps_inline_markers_raw() {
        let md = "\n```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```\n";
        assert_eq!(
            to_html(md),
            "<div><pre><code>This is text that _should_ remain\n\
             the **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_codeblock_language_line_is_kept() {
        let md = "\n```python\ndef greet(name):\n    return name\n```\n";
        assert_eq!(
            to_html(md),
            "<div><pre><code>python\ndef greet(name):\n    return name\n</code></pre></div>"
        );
    }

    #[test]
    fn test_heading_levels() {
        let md = "\n# Heading 1\n\n## Heading 2 with **bold** text\n\n### Heading 3\n\n\
                  #### Heading 4\n\n##### Heading 5\n\n###### Heading 6\n";
        assert_eq!(
            to_html(md),
            "<div><h1>Heading 1</h1><h2>Heading 2 with <b>bold</b> text</h2>\
             <h3>Heading 3</h3><h4>Heading 4</h4><h5>Heading 5</h5><h6>Heading 6</h6></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        let md = "\n- First item with **bold** text\n- Second item with _italic_ text\n\
                  - Third item with `code` text\n";
        assert_eq!(
            to_html(md),
            "<div><ul><li>First item with <b>bold</b> text</li>\
             <li>Second item with <i>italic</i> text</li>\
             <li>Third item with <code>code</code> text</li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        let md = "\n1. First numbered item\n2. Second item with **bold**\n3. Third item with _italic_\n";
        assert_eq!(
            to_html(md),
            "<div><ol><li>First numbered item</li><li>Second item with <b>bold</b></li>\
             <li>Third item with <i>italic</i></li></ol></div>"
        );
    }

    #[test]
    fn test_quote_block() {
        let md = "\n> This is a quote with **bold** text\n> and _italic_ text on multiple lines\n\
                  > with `code` as well\n";
        assert_eq!(
            to_html(md),
            "<div><blockquote>This is a quote with <b>bold</b> text\n\
             and <i>italic</i> text on multiple lines\nwith <code>code</code> as well</blockquote></div>"
        );
    }

    #[test]
    fn test_quote_marker_without_space() {
        assert_eq!(
            to_html(">bare marker\n> spaced marker"),
            "<div><blockquote>bare marker\nspaced marker</blockquote></div>"
        );
    }

    #[test]
    fn test_links_and_images_in_paragraphs() {
        let md = "\nThis paragraph has a [link](https://example.com) in it.\n\n\
                  This one has an ![image](https://example.com/image.png) in it.\n";
        let html = to_html(md);
        assert!(html.contains("<a href=\"https://example.com\">link</a>"));
        assert!(html.contains("<img src=\"https://example.com/image.png\"alt=\"image\"></img>"));
    }

    #[test]
    fn test_empty_document_renders_empty_div() {
        assert_eq!(to_html(""), "<div></div>");
        assert_eq!(to_html("   \n\n  \t \n"), "<div></div>");
        assert_eq!(markdown_to_node("").unwrap(), HtmlNode::EmptyRoot);
    }

    #[test]
    fn test_single_paragraph() {
        assert_eq!(
            to_html("Just a simple paragraph."),
            "<div><p>Just a simple paragraph.</p></div>"
        );
    }

    #[test]
    fn test_document_wrapped_in_div() {
        let html = to_html("# Title\n\nBody text.");
        assert!(html.starts_with("<div"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_mixed_document() {
        let md = "\n# Main Title\n\nThis is a paragraph with **bold** and _italic_ text.\n\n\
                  ## Subtitle\n\n- List item one\n- List item two\n\n\
                  ```\ndef hello():\n    pass\n```\n\n\
                  > This is a quote\n> with multiple lines\n\n\
                  1. Numbered item\n2. Another numbered item\n";
        let html = to_html(md);
        assert!(html.contains("<h1>Main Title</h1>"));
        assert!(html.contains("<p>This is a paragraph with <b>bold</b> and <i>italic</i> text.</p>"));
        assert!(html.contains("<h2>Subtitle</h2>"));
        assert!(html.contains("<ul><li>List item one</li><li>List item two</li></ul>"));
        assert!(html.contains("<pre><code>def hello():\n    pass\n</code></pre>"));
        assert!(html.contains("<blockquote>This is a quote\nwith multiple lines</blockquote>"));
        assert!(html.contains("<ol><li>Numbered item</li><li>Another numbered item</li></ol>"));
    }

    #[test]
    fn test_unmatched_delimiter_aborts_conversion() {
        let err = markdown_to_node("some **unclosed bold").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedDelimiter {
                delimiter: "**".to_owned(),
                text: "some **unclosed bold".to_owned(),
            }
        );
    }
}

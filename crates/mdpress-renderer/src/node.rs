//! HTML node tree and rendering.
//!
//! Markdown conversion produces a tree of [`HtmlNode`] values: text-bearing
//! leaves and tag-bearing parents. Rendering walks the tree and concatenates
//! each parent's children between its own open and close tags.

use std::fmt::Write;

/// Ordered `key="value"` attribute pairs for an element.
pub type AttrList = Vec<(String, String)>;

/// Error returned when a node tree cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A parent element reached the renderer with no children.
    #[error("parent element <{tag}> has no children")]
    MissingChildren {
        /// Tag of the offending parent.
        tag: String,
    },
}

/// A node in the HTML output tree.
///
/// Built bottom-up by the converter: leaves from inline spans, parents from
/// blocks, one root parent per document. Immutable once built. Equality is
/// structural over tag, text/children, and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text-bearing node with no children.
    ///
    /// Renders its text verbatim when `tag` is `None`, otherwise wrapped in
    /// the tag.
    Leaf {
        /// Element tag; `None` for a bare text run.
        tag: Option<String>,
        /// Text content, emitted unescaped.
        text: String,
        /// Attribute pairs in render order.
        attrs: AttrList,
    },
    /// Container holding ordered child nodes.
    Parent {
        /// Element tag.
        tag: String,
        /// Child nodes, rendered in order.
        children: Vec<HtmlNode>,
        /// Attribute pairs in render order.
        attrs: AttrList,
    },
    /// Root of a document that produced no blocks.
    ///
    /// Renders as `<div></div>`, bypassing the at-least-one-child rule that
    /// applies to regular parents.
    EmptyRoot,
}

impl HtmlNode {
    /// Create a tagless leaf that renders its text verbatim.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            text: text.into(),
            attrs: Vec::new(),
        }
    }

    /// Create a tagged leaf with no attributes.
    #[must_use]
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            text: text.into(),
            attrs: Vec::new(),
        }
    }

    /// Create a tagged leaf with attributes.
    #[must_use]
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        text: impl Into<String>,
        attrs: AttrList,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            text: text.into(),
            attrs,
        }
    }

    /// Create a parent with the given children and no attributes.
    #[must_use]
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Render the node and its descendants to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingChildren`] if a parent node has an empty
    /// child list.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            Self::Leaf {
                tag: None, text, ..
            } => Ok(text.clone()),
            Self::Leaf {
                tag: Some(tag),
                text,
                attrs,
            } => Ok(format!("<{tag}{}>{text}</{tag}>", render_attrs(attrs))),
            Self::Parent {
                tag,
                children,
                attrs,
            } => {
                if children.is_empty() {
                    return Err(RenderError::MissingChildren { tag: tag.clone() });
                }
                let mut inner = String::new();
                for child in children {
                    inner.push_str(&child.render()?);
                }
                Ok(format!("<{tag}{}>{inner}</{tag}>", render_attrs(attrs)))
            }
            Self::EmptyRoot => Ok("<div></div>".to_owned()),
        }
    }
}

/// Render attribute pairs for insertion after a tag name.
///
/// Pairs are concatenated with no separating space, the joined string is
/// trimmed, and a single space is prefixed. An empty list renders as the
/// empty string so a bare tag stays `<tag>`.
fn render_attrs(attrs: &AttrList) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut joined = String::new();
    for (key, value) in attrs {
        let _ = write!(joined, "{key}=\"{value}\"");
    }
    format!(" {}", joined.trim())
}

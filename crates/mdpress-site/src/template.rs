//! HTML page template substitution.
//!
//! Templates are plain HTML files carrying two placeholder tokens. Both are
//! replaced by literal string substitution; the title and rendered content
//! are inserted verbatim with no escaping.

/// Placeholder replaced by the page title.
const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered page content.
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitute the title and content into a template.
#[must_use]
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_apply_template_substitutes_both_placeholders() {
        let template = "<html><head><title>{{ Title }}</title></head>\
                        <body>{{ Content }}</body></html>";
        let page = apply_template(template, "My Page", "<div><p>hi</p></div>");
        assert_eq!(
            page,
            "<html><head><title>My Page</title></head>\
             <body><div><p>hi</p></div></body></html>"
        );
    }

    #[test]
    fn test_apply_template_replaces_every_occurrence() {
        let template = "{{ Title }} / {{ Title }}";
        assert_eq!(apply_template(template, "T", ""), "T / T");
    }

    #[test]
    fn test_apply_template_inserts_verbatim() {
        // No escaping; the content is trusted HTML.
        let page = apply_template("{{ Content }}", "", "<b>&amp;</b>");
        assert_eq!(page, "<b>&amp;</b>");
    }
}

use regex::Regex;
use scraper::{Html, Node};
use std::borrow::Cow;
use std::sync::LazyLock;

static TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<(?:[a-zA-Z][a-zA-Z0-9-]*|!DOCTYPE|!--|/[a-zA-Z])").ok());

const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

#[must_use]
pub fn looks_like_html(text: &str) -> bool {
    TAG.as_ref().is_some_and(|re| re.is_match(text))
}

/// Reduce an HTML page to its visible text, one text node per line.
/// Plain text is returned untouched.
#[must_use]
pub fn visible_text(raw: &str) -> Cow<'_, str> {
    if !looks_like_html(raw) {
        return Cow::Borrowed(raw);
    }

    let document = Html::parse_document(raw);
    let mut lines = Vec::new();
    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Cow::Owned(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let raw = "Viktor Hovland +2800";
        assert!(matches!(visible_text(raw), Cow::Borrowed(_)));
    }

    #[test]
    fn drops_scripts_and_splits_nodes() {
        let raw = r#"<html><head><script>var x = "Rory McIlroy +100";</script></head>
            <body><div class="row"><span>Rory McIlroy</span><span>+850</span></div></body></html>"#;
        let text = visible_text(raw);
        assert_eq!(text, "Rory McIlroy\n+850");
    }
}

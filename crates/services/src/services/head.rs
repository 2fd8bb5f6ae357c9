//! Idempotent document-head rewriting. Managed tags carry a
//! `data-managed="suncore"` attribute so they can be replaced on every apply;
//! the analytics script carries `data-analytics="suncore-gtag"` and is
//! injected at most once.

use once_cell::sync::Lazy;
use regex::Regex;

use super::content_resolver::ResolvedMeta;

pub const ANALYTICS_MARKER: &str = r#"data-analytics="suncore-gtag""#;

static MANAGED_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<title data-managed="suncore">.*?</title>\s*|<(?:meta|link)\b[^>]*data-managed="suncore"[^>]*>\s*"#,
    )
    .expect("managed tag regex")
});

/// Rewrite `head` so it contains exactly one managed copy of each meta tag,
/// the canonical link, and (when configured) one analytics script. Applying
/// twice yields the same document as applying once.
pub fn apply(head: &str, meta: &ResolvedMeta) -> String {
    let stripped = MANAGED_TAG.replace_all(head, "");

    let mut block = String::new();
    block.push_str(&format!(
        "<title data-managed=\"suncore\">{}</title>\n",
        escape_text(&meta.title)
    ));
    push_meta(&mut block, "description", &meta.description);
    push_meta(&mut block, "keywords", &meta.keywords);
    push_property(&mut block, "og:title", &meta.title);
    push_property(&mut block, "og:description", &meta.description);
    push_property(&mut block, "og:image", &meta.og_image);
    block.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\" data-managed=\"suncore\">\n",
        escape_attr(&meta.canonical_url)
    ));

    if let Some(id) = &meta.analytics_id {
        // Checked against the stripped document: managed tags never carry the
        // analytics marker, so a previously injected script survives the strip
        // and suppresses re-injection.
        if !stripped.contains(ANALYTICS_MARKER) {
            block.push_str(&format!(
                "<script async src=\"https://www.googletagmanager.com/gtag/js?id={}\" {}></script>\n",
                escape_attr(id),
                ANALYTICS_MARKER
            ));
        }
    }

    match stripped.find("</head>") {
        Some(idx) => {
            let mut out = String::with_capacity(stripped.len() + block.len());
            out.push_str(&stripped[..idx]);
            out.push_str(&block);
            out.push_str(&stripped[idx..]);
            out
        }
        None => {
            let mut out = stripped.into_owned();
            out.push_str(&block);
            out
        }
    }
}

fn push_meta(block: &mut String, name: &str, content: &str) {
    block.push_str(&format!(
        "<meta name=\"{}\" content=\"{}\" data-managed=\"suncore\">\n",
        name,
        escape_attr(content)
    ));
}

fn push_property(block: &mut String, property: &str, content: &str) {
    block.push_str(&format!(
        "<meta property=\"{}\" content=\"{}\" data-managed=\"suncore\">\n",
        property,
        escape_attr(content)
    ));
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(analytics: Option<&str>) -> ResolvedMeta {
        ResolvedMeta {
            title: "Solar Shine".to_string(),
            description: "Solar services".to_string(),
            keywords: "solar".to_string(),
            og_image: "/og.jpg".to_string(),
            canonical_url: "https://solarshine.example/".to_string(),
            analytics_id: analytics.map(str::to_string),
        }
    }

    #[test]
    fn apply_is_idempotent() {
        let head = "<head><meta charset=\"utf-8\"></head>";
        let once = apply(head, &meta(None));
        let twice = apply(&once, &meta(None));
        assert_eq!(once, twice);
        assert_eq!(once.matches("<title").count(), 1);
        assert_eq!(once.matches("rel=\"canonical\"").count(), 1);
    }

    #[test]
    fn unmanaged_tags_survive() {
        let head = "<head><meta name=\"viewport\" content=\"width=device-width\"></head>";
        let out = apply(head, &meta(None));
        assert!(out.contains("viewport"));
    }

    #[test]
    fn analytics_injected_exactly_once() {
        let head = "<head></head>";
        let once = apply(head, &meta(Some("G-123")));
        assert_eq!(once.matches(ANALYTICS_MARKER).count(), 1);
        let twice = apply(&once, &meta(Some("G-123")));
        assert_eq!(twice.matches(ANALYTICS_MARKER).count(), 1);
    }

    #[test]
    fn no_analytics_id_no_script() {
        let out = apply("<head></head>", &meta(None));
        assert!(!out.contains("gtag"));
    }

    #[test]
    fn updated_title_replaces_managed_tag() {
        let first = apply("<head></head>", &meta(None));
        let mut changed = meta(None);
        changed.title = "New Title".to_string();
        let second = apply(&first, &changed);
        assert!(second.contains("New Title"));
        assert!(!second.contains(">Solar Shine</title>"));
        assert_eq!(second.matches("<title").count(), 1);
    }
}

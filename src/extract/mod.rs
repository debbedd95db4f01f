//! Heuristic extraction of legal text from raw HTML
//!
//! Prunes obvious non-content elements, then scans a fixed priority list of
//! selectors for large text blocks that mention legal language. The result is
//! a plausible ToS blob handed to the LLM extraction step; there is no
//! correctness guarantee here.

use scraper::{ElementRef, Html, Node, Selector};

/// Minimum length for a text block to count as a candidate
const MIN_BLOCK_LEN: usize = 500;

/// Elements that never contain ToS content
const STRIP_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "iframe", "embed", "object", "video", "audio",
];

/// Class names marking navigation / ads / social chrome
const STRIP_CLASSES: &[&str] = &[
    "nav",
    "navigation",
    "header",
    "footer",
    "advertisement",
    "ads",
    "social",
    "share",
    "comment",
];

/// Additional classes stripped only for the body-text fallback
const FALLBACK_STRIP_CLASSES: &[&str] = &[
    "sidebar",
    "menu",
    "breadcrumb",
    "related",
    "recommended",
    "suggestions",
];

/// ARIA roles for page chrome
const STRIP_ROLES: &[&str] = &["navigation", "banner", "contentinfo"];

/// Container selectors likely to hold legal text, most specific first
const TOS_SELECTORS: &[&str] = &[
    ".terms, .tos, .terms-of-service, .terms-of-use, .user-agreement",
    ".legal, .legal-terms, .agreement, .conditions",
    "[id*=\"terms\"], [id*=\"tos\"], [class*=\"terms\"], [class*=\"tos\"]",
    "main, .main, .content, .main-content, .page-content",
    ".container, .wrapper, .inner",
    "article, section",
];

/// Keywords whose presence marks a block as legal-sounding
const TOS_KEYWORDS: &[&str] = &[
    "terms of service",
    "terms of use",
    "user agreement",
    "terms and conditions",
    "agreement",
    "liability",
    "disclaimer",
    "prohibited",
    "violation",
    "termination",
    "suspension",
    "intellectual property",
    "copyright",
    "privacy policy",
    "data collection",
    "user content",
    "service provider",
    "governing law",
    "dispute resolution",
    "arbitration",
    "indemnification",
];

/// Check whether a text block contains at least one legal keyword
pub fn contains_tos_keywords(text: &str) -> bool {
    let lower = text.to_lowercase();
    TOS_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Extract plausible ToS text from raw HTML
///
/// Scans the selector priority list for blocks over 500 characters that
/// mention legal language; falls back to full body text when none qualify.
/// Whitespace is collapsed in the result.
pub fn extract_clean_content(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut tos_content = String::new();

    for selector_str in TOS_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        for element in document.select(&selector) {
            let text = clean_text(element, false);
            if text.len() > MIN_BLOCK_LEN && contains_tos_keywords(&text) {
                tos_content.push_str(&text);
                tos_content.push_str("\n\n");
            }
        }
    }

    // No block qualified: fall back to the whole body, stripped harder
    if tos_content.trim().is_empty() {
        if let Ok(body_selector) = Selector::parse("body") {
            if let Some(body) = document.select(&body_selector).next() {
                tos_content = clean_text(body, true);
            }
        }
    }

    collapse_whitespace(&tos_content)
}

/// Collect the visible text of an element, skipping pruned subtrees
fn clean_text(element: ElementRef, fallback: bool) -> String {
    let mut out = String::new();
    collect_text(*element, fallback, &mut out);
    out.trim().to_string()
}

fn collect_text(node: ego_tree::NodeRef<'_, Node>, fallback: bool, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) => {
                if should_strip(el, fallback) {
                    continue;
                }
                collect_text(child, fallback, out);
            }
            _ => {}
        }
    }
}

fn should_strip(el: &scraper::node::Element, fallback: bool) -> bool {
    let name = el.name();
    if STRIP_TAGS.contains(&name) {
        return true;
    }
    if fallback && name == "aside" {
        return true;
    }

    if let Some(role) = el.attr("role") {
        if STRIP_ROLES.contains(&role) {
            return true;
        }
    }

    if el
        .classes()
        .any(|class| STRIP_CLASSES.contains(&class))
    {
        return true;
    }

    fallback
        && el
            .classes()
            .any(|class| FALLBACK_STRIP_CLASSES.contains(&class))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_legal_block() -> String {
        let clause = "You agree that any dispute shall be resolved through binding arbitration. ";
        clause.repeat(10)
    }

    #[test]
    fn finds_terms_div_with_keyword() {
        let html = format!(
            "<html><body><div class=\"terms\">{}</div></body></html>",
            long_legal_block()
        );
        let content = extract_clean_content(&html);
        assert!(!content.is_empty());
        assert!(content.contains("arbitration"));
    }

    #[test]
    fn short_blocks_are_ignored_but_body_fallback_applies() {
        let html = "<html><body><div class=\"terms\">short arbitration note</div></body></html>";
        let content = extract_clean_content(html);
        // Falls back to body text since the block is under the size threshold
        assert!(content.contains("short arbitration note"));
    }

    #[test]
    fn no_keywords_falls_back_to_body_text() {
        let html = "<html><body><p>Just a recipe for banana bread and nothing else.</p></body></html>";
        let content = extract_clean_content(html);
        assert!(content.contains("banana bread"));
    }

    #[test]
    fn scripts_and_nav_are_stripped() {
        let html = format!(
            "<html><body><script>var x = 1;</script><nav>Home | About</nav>\
             <div class=\"legal\">{}</div></body></html>",
            long_legal_block()
        );
        let content = extract_clean_content(&html);
        assert!(!content.contains("var x"));
        assert!(!content.contains("Home | About"));
        assert!(content.contains("arbitration"));
    }

    #[test]
    fn ad_and_social_chrome_is_stripped_in_fallback() {
        let html = "<html><body><div class=\"ads\">Buy now!</div>\
                    <aside>unrelated</aside><p>Plain page content.</p></body></html>";
        let content = extract_clean_content(html);
        assert!(!content.contains("Buy now"));
        assert!(!content.contains("unrelated"));
        assert!(content.contains("Plain page content."));
    }

    #[test]
    fn whitespace_is_collapsed() {
        let html = "<html><body><p>spaced    out\n\n\ttext</p></body></html>";
        let content = extract_clean_content(html);
        assert_eq!(content, "spaced out text");
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        assert!(contains_tos_keywords("MANDATORY ARBITRATION CLAUSE"));
        assert!(contains_tos_keywords("Limitation of Liability"));
        assert!(!contains_tos_keywords("a page about gardening"));
    }

    #[test]
    fn id_substring_selector_matches() {
        let html = format!(
            "<html><body><div id=\"site-terms-page\">{}</div></body></html>",
            long_legal_block()
        );
        let content = extract_clean_content(&html);
        assert!(content.contains("arbitration"));
    }
}

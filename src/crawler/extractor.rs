//! Contact and link extraction
//!
//! Emails and phone numbers are matched on the raw page text, markup
//! included, so addresses inside attributes (`mailto:` links, data
//! attributes) are found too. Links come from a permissive HTML parse.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern compiles")
});

// Loose on purpose: any digit-led run of 9+ digits, spaces, hyphens and
// parentheses. Long hyphenated IDs match too.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s\-\(\)]{7,}\d").expect("phone pattern compiles"));

static ANCHOR_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| Selector::parse("a[href]").ok());

/// Everything extracted from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFindings {
    /// Unique emails in order of appearance
    pub emails: IndexSet<String>,

    /// Unique phone-like sequences in order of appearance
    pub phones: IndexSet<String>,

    /// Resolved anchor targets in markup order, any scheme, duplicates kept
    pub links: Vec<String>,
}

/// Extracts emails, phone numbers and links from a page
///
/// # Arguments
///
/// * `page_text` - The raw response body
/// * `page_url` - The URL the body was fetched from, used to resolve links
///
/// # Example
///
/// ```
/// use spider_sense::crawler::extract;
///
/// let html = r#"<a href="/contact">Contact</a> info@example.com"#;
/// let found = extract(html, "https://example.com/");
/// assert!(found.emails.contains("info@example.com"));
/// assert_eq!(found.links, vec!["https://example.com/contact"]);
/// ```
pub fn extract(page_text: &str, page_url: &str) -> PageFindings {
    let links = match Url::parse(page_url) {
        Ok(base_url) => extract_links(page_text, &base_url),
        Err(e) => {
            tracing::debug!("Cannot resolve links of {}: {}", page_url, e);
            Vec::new()
        }
    };

    PageFindings {
        emails: extract_emails(page_text),
        phones: extract_phones(page_text),
        links,
    }
}

/// Returns every email address in `text`, deduplicated
pub fn extract_emails(text: &str) -> IndexSet<String> {
    EMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns every phone-like sequence in `text`, deduplicated
pub fn extract_phones(text: &str) -> IndexSet<String> {
    PHONE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns the resolved `href` of every anchor, in markup order
///
/// Malformed markup is repaired by the parser rather than rejected, and
/// hrefs that cannot be joined onto `base_url` are skipped.
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let Some(selector) = ANCHOR_SELECTOR.as_ref() else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base_url.join(href).ok())
        .map(|url| url.to_string())
        .collect()
}

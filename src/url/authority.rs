use url::Url;

/// Returns the authority (`host[:port]`) of a URL
///
/// The host is taken as the `url` crate serializes it (already lowercased for
/// domains). The port only appears when it is explicit and differs from the
/// scheme's default, so `http://example.com:80/` and `http://example.com/`
/// share the authority `example.com`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use spider_sense::url::authority;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(authority(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Returns true if the URL uses `http` or `https`
pub fn is_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Returns true if `link` is a web URL on exactly the given authority
///
/// Unparseable links, non-web schemes and hostless URLs are never in scope.
pub fn in_scope(link: &str, seed_authority: &str) -> bool {
    let Ok(url) = Url::parse(link) else {
        return false;
    };

    is_web_scheme(&url) && authority(&url).as_deref() == Some(seed_authority)
}

//! Validated crawl input

use crate::url::{authority, validate_seed_url};
use crate::ValidationError;

/// A seed URL and depth budget that passed validation
///
/// The only way to build one is through [`CrawlRequest::new`] or
/// [`CrawlRequest::from_input`], so the traversal never sees a bad seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    seed: String,
    seed_authority: String,
    max_depth: u32,
}

impl CrawlRequest {
    /// Validates a seed URL and pairs it with a depth budget
    ///
    /// The seed is kept as typed (minus surrounding whitespace); the visited
    /// set compares URLs as exact strings.
    pub fn new(seed_url: &str, max_depth: u32) -> Result<Self, ValidationError> {
        let parsed = validate_seed_url(seed_url)?;
        let seed_authority =
            authority(&parsed).ok_or_else(|| ValidationError::MissingHost(seed_url.to_string()))?;

        Ok(Self {
            seed: seed_url.trim().to_string(),
            seed_authority,
            max_depth,
        })
    }

    /// Validates raw text input for both the seed and the depth
    ///
    /// # Example
    ///
    /// ```
    /// use spider_sense::crawler::CrawlRequest;
    ///
    /// let request = CrawlRequest::from_input("https://example.com/", "2").unwrap();
    /// assert_eq!(request.max_depth(), 2);
    /// assert!(CrawlRequest::from_input("example.com", "2").is_err());
    /// assert!(CrawlRequest::from_input("https://example.com/", "-1").is_err());
    /// ```
    pub fn from_input(seed_url: &str, depth: &str) -> Result<Self, ValidationError> {
        let mut request = Self::new(seed_url, 0)?;
        request.max_depth = parse_depth(depth)?;
        Ok(request)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The `host[:port]` every followed link must share
    pub fn seed_authority(&self) -> &str {
        &self.seed_authority
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

/// Parses a depth typed by the user
///
/// Zero is valid and crawls nothing. Negative numbers are rejected
/// separately from text that is not an integer at all.
pub fn parse_depth(input: &str) -> Result<u32, ValidationError> {
    let input = input.trim();
    let value: i64 = input
        .parse()
        .map_err(|_| ValidationError::InvalidDepth(input.to_string()))?;

    if value < 0 {
        return Err(ValidationError::NegativeDepth(value));
    }

    u32::try_from(value).map_err(|_| ValidationError::InvalidDepth(input.to_string()))
}

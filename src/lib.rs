//! SpiderSense: a bounded-depth contact crawler
//!
//! This crate walks a single site depth-first from a seed URL, following only
//! links that share the seed's authority, and collects the email addresses and
//! phone numbers found in every visited page.

pub mod config;
pub mod crawler;
pub mod output;
pub mod report;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for SpiderSense operations
#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Crawl worker failed: {0}")]
    Worker(String),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::RunState,
        to: state::RunState,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Rejected crawl input (seed URL or depth)
///
/// Raised before any page is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL must start with http:// or https://, got '{0}'")]
    InvalidScheme(String),

    #[error("Malformed URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("URL has no host: '{0}'")]
    MissingHost(String),

    #[error("Depth must be an integer, got '{0}'")]
    InvalidDepth(String),

    #[error("Depth must not be negative, got {0}")]
    NegativeDepth(i64),
}

/// A transport-level failure while fetching one URL
///
/// Only the branch rooted at `url` is abandoned; the crawl goes on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error accessing {url}: {cause}")]
pub struct FetchError {
    pub url: String,
    pub cause: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: impl ToString) -> Self {
        Self {
            url: url.into(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for SpiderSense operations
pub type Result<T> = std::result::Result<T, SpiderError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{
    start_crawl, CrawlOutcome, CrawlRequest, CrawlSession, CrawlSummary, Crawler, HttpFetcher,
    PageFetcher,
};
pub use report::{CrawlReport, Report};
pub use state::RunState;

//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - Validation of the seed URL and depth budget
//! - HTTP fetching behind the `PageFetcher` seam
//! - Email, phone and link extraction
//! - The depth-first traversal and its background session

mod engine;
mod extractor;
mod fetcher;
mod request;
mod session;

pub use engine::{CrawlOutcome, Crawler};
pub use extractor::{extract, extract_emails, extract_links, extract_phones, PageFindings};
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use request::{parse_depth, CrawlRequest};
pub use session::{CrawlSession, CrawlSummary};

use crate::config::{validate, Config};
use crate::Result;
use std::sync::Arc;

/// Validates raw input and starts a background crawl over HTTP
///
/// This is the main entry point for front ends. It will:
/// 1. Re-validate the configuration, which callers may have overridden
/// 2. Validate the seed URL and depth, before anything is fetched
/// 3. Build the HTTP client from the configuration
/// 4. Spawn the traversal on its own task
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed_url` - Where to start; must begin with `http://` or `https://`
/// * `depth` - Depth budget as typed; a non-negative integer
///
/// # Returns
///
/// * `Ok(CrawlSession)` - The running session
/// * `Err(SpiderError)` - Invalid configuration or input, or HTTP client setup failure
pub fn start_crawl(
    config: &Config,
    seed_url: &str,
    depth: &str,
) -> Result<CrawlSession> {
    validate(config)?;
    let request = CrawlRequest::from_input(seed_url, depth)?;
    let crawler = Crawler::from_config(config)?;
    Ok(CrawlSession::spawn(Arc::new(crawler), request))
}

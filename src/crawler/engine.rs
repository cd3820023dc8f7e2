//! Traversal engine - depth-first crawl of a single site
//!
//! Pages are explored in pre-order with an explicit stack instead of
//! recursion: a target is checked when it is popped, exactly as a recursive
//! call would check it on entry, and children are pushed in reverse so the
//! first link in the markup is explored first.
//!
//! A target is skipped when its depth budget is spent or it was already
//! visited. The whole run stops when the cancellation token is observed.

use crate::config::Config;
use crate::crawler::extractor::extract;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::request::CrawlRequest;
use crate::report::Report;
use crate::url::in_scope;
use std::fmt;
use tokio_util::sync::CancellationToken;

/// How a crawl run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// Every in-scope branch was explored to its depth limit
    Completed,

    /// A stop request was observed before traversal finished
    Cancelled,
}

impl fmt::Display for CrawlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A URL waiting on the stack with its remaining depth budget
#[derive(Debug)]
struct CrawlTarget {
    url: String,
    remaining_depth: u32,
}

/// Drives fetching and extraction over a site
pub struct Crawler<F = HttpFetcher> {
    fetcher: F,
}

impl Crawler<HttpFetcher> {
    /// Builds a crawler that fetches over HTTP using the given configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(HttpFetcher::from_config(
            &config.crawler,
            &config.user_agent,
        )?))
    }
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Runs one crawl, writing into `report`
    ///
    /// The report is reset first. Fetch failures are recorded in the report
    /// and end only their own branch.
    ///
    /// # Arguments
    ///
    /// * `request` - Validated seed and depth budget
    /// * `cancel` - Checked before every fetch; an in-flight fetch is not aborted
    /// * `report` - Live aggregator, readable while the crawl runs
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spider_sense::config::Config;
    /// use spider_sense::crawler::{CrawlRequest, Crawler};
    /// use spider_sense::report::Report;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let crawler = Crawler::from_config(&Config::default())?;
    /// let request = CrawlRequest::new("https://example.com/", 2)?;
    /// let report = Report::new();
    /// let outcome = crawler.crawl(&request, &CancellationToken::new(), &report).await;
    /// println!("{}: {} pages", outcome, report.pages_visited());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(
        &self,
        request: &CrawlRequest,
        cancel: &CancellationToken,
        report: &Report,
    ) -> CrawlOutcome {
        report.reset();

        tracing::info!(
            "Starting crawl on: {} with depth: {}",
            request.seed(),
            request.max_depth()
        );

        let mut stack = vec![CrawlTarget {
            url: request.seed().to_string(),
            remaining_depth: request.max_depth(),
        }];

        while let Some(target) = stack.pop() {
            if cancel.is_cancelled() {
                tracing::info!(
                    "Crawling stopped by user after {} pages",
                    report.pages_visited()
                );
                return CrawlOutcome::Cancelled;
            }

            if target.remaining_depth == 0 || !report.mark_visited(&target.url) {
                continue;
            }

            let body = match self.fetcher.fetch(&target.url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.record_failure(e);
                    continue;
                }
            };

            let findings = extract(&body, &target.url);
            tracing::info!("Visited: {}", target.url);
            tracing::debug!(
                "{}: {} emails, {} phones, {} links",
                target.url,
                findings.emails.len(),
                findings.phones.len(),
                findings.links.len()
            );
            report.merge_findings(findings.emails, findings.phones);

            let children = findings
                .links
                .into_iter()
                .filter(|link| in_scope(link, request.seed_authority()))
                .map(|url| CrawlTarget {
                    url,
                    remaining_depth: target.remaining_depth - 1,
                })
                .collect::<Vec<_>>();
            stack.extend(children.into_iter().rev());
        }

        tracing::info!(
            "Crawl completed. Pages visited: {}",
            report.pages_visited()
        );
        CrawlOutcome::Completed
    }
}

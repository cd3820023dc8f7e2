//! Background crawl sessions
//!
//! A session runs one crawl on its own tokio task so the caller can keep
//! reading snapshots and issue a stop request without waiting on network I/O.

use crate::crawler::engine::{CrawlOutcome, Crawler};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::request::CrawlRequest;
use crate::report::{CrawlReport, Report};
use crate::state::{RunState, RunTracker};
use crate::SpiderError;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Final result of a session
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub outcome: CrawlOutcome,
    pub report: CrawlReport,
}

/// A crawl running on a background task
///
/// Each session owns its own report, cancellation token and run state, so
/// independent sessions never share anything.
pub struct CrawlSession {
    report: Report,
    cancel: CancellationToken,
    tracker: RunTracker,
    task: JoinHandle<CrawlOutcome>,
}

impl CrawlSession {
    /// Starts crawling `request` on a new tokio task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(crawler: Arc<Crawler<F>>, request: CrawlRequest) -> Self
    where
        F: PageFetcher + 'static,
    {
        let report = Report::new();
        let cancel = CancellationToken::new();
        let tracker = RunTracker::new();

        let task = {
            let report = report.clone();
            let cancel = cancel.clone();
            let tracker = tracker.clone();
            tokio::spawn(async move {
                advance(&tracker, RunState::Running);
                let outcome = crawler.crawl(&request, &cancel, &report).await;
                advance(
                    &tracker,
                    match outcome {
                        CrawlOutcome::Completed => RunState::Completed,
                        CrawlOutcome::Cancelled => RunState::Cancelled,
                    },
                );
                outcome
            })
        };

        Self {
            report,
            cancel,
            tracker,
            task,
        }
    }

    /// Requests a cooperative stop
    ///
    /// Takes effect before the next fetch; a fetch already in flight finishes
    /// or times out first.
    pub fn stop(&self) {
        if !self.cancel.is_cancelled() {
            tracing::info!("Stop requested");
        }
        self.cancel.cancel();
    }

    pub fn is_stop_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A token that stops this session when cancelled
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Snapshot of what the crawl has gathered so far
    pub fn snapshot(&self) -> CrawlReport {
        self.report.snapshot()
    }

    /// A handle on the live report, usable after the session is consumed
    pub fn report(&self) -> Report {
        self.report.clone()
    }

    pub fn state(&self) -> RunState {
        self.tracker.current()
    }

    /// Waits for the crawl to end
    ///
    /// If the worker task panicked or was aborted the run is marked
    /// `Failed` and an error is returned; whatever it gathered is still
    /// readable from the report it was writing to.
    pub async fn wait(self) -> crate::Result<CrawlSummary> {
        match self.task.await {
            Ok(outcome) => Ok(CrawlSummary {
                outcome,
                report: self.report.snapshot(),
            }),
            Err(e) => {
                advance(&self.tracker, RunState::Failed);
                tracing::error!("Crawl worker failed: {}", e);
                Err(SpiderError::Worker(e.to_string()))
            }
        }
    }
}

fn advance(tracker: &RunTracker, next: RunState) {
    if let Err(e) = tracker.transition(next) {
        tracing::error!("{}", e);
    }
}

//! Report aggregation for a crawl run
//!
//! `Report` is the live, shared accumulator the traversal writes into.
//! Readers never touch the live sets directly: `snapshot()` copies them under
//! the lock into a `CrawlReport`, so a reader running alongside the crawl sees
//! either the state before an update or after it, never in between.

use crate::FetchError;
use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Findings {
    visited: IndexSet<String>,
    emails: IndexSet<String>,
    phones: IndexSet<String>,
    failures: Vec<FetchError>,
}

/// Shared accumulator of visited URLs, findings and fetch failures
///
/// Cloning a `Report` yields another handle to the same data.
#[derive(Debug, Clone, Default)]
pub struct Report {
    inner: Arc<Mutex<Findings>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Findings> {
        // Every mutation is a single insert or clear, so a poisoned lock
        // still guards consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clears all sets and failures
    ///
    /// Called once at the start of a run, never while one is in progress.
    pub fn reset(&self) {
        let mut findings = self.lock();
        findings.visited.clear();
        findings.emails.clear();
        findings.phones.clear();
        findings.failures.clear();
    }

    /// Records a URL as visited
    ///
    /// Returns false if it was already visited during this run.
    pub fn mark_visited(&self, url: &str) -> bool {
        self.lock().visited.insert(url.to_string())
    }

    /// Returns true if the URL was visited during this run
    pub fn is_visited(&self, url: &str) -> bool {
        self.lock().visited.contains(url)
    }

    /// Merges newly extracted emails and phone numbers
    pub fn merge_findings<E, P>(&self, emails: E, phones: P)
    where
        E: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        let mut findings = self.lock();
        findings.emails.extend(emails);
        findings.phones.extend(phones);
    }

    /// Records a failed fetch
    pub fn record_failure(&self, error: FetchError) {
        self.lock().failures.push(error);
    }

    /// Number of pages visited so far
    pub fn pages_visited(&self) -> usize {
        self.lock().visited.len()
    }

    /// Takes a consistent copy of the current state
    ///
    /// Safe to call at any time, including while a crawl is running.
    pub fn snapshot(&self) -> CrawlReport {
        let findings = self.lock();
        CrawlReport {
            generated_at: Utc::now(),
            pages_visited: findings.visited.len(),
            visited: findings.visited.iter().cloned().collect(),
            emails: findings.emails.iter().cloned().collect(),
            phones: findings.phones.iter().cloned().collect(),
            failures: findings.failures.clone(),
        }
    }
}

/// Read-only snapshot of a crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// When this snapshot was taken
    pub generated_at: DateTime<Utc>,

    /// Number of pages visited
    pub pages_visited: usize,

    /// Visited URLs in depth-first pre-order
    pub visited: Vec<String>,

    /// Unique emails in first-seen order
    pub emails: Vec<String>,

    /// Unique phone numbers in first-seen order
    pub phones: Vec<String>,

    /// Every fetch failure, in the order it happened
    pub failures: Vec<FetchError>,
}

impl CrawlReport {
    /// Returns true if nothing was extracted
    pub fn has_findings(&self) -> bool {
        !self.emails.is_empty() || !self.phones.is_empty()
    }
}

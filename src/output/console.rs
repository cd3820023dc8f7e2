//! Console summary of a finished crawl

use crate::crawler::{CrawlOutcome, CrawlSummary};
use crate::report::CrawlReport;

/// Renders the end-of-run summary shown on the terminal
pub fn format_summary(summary: &CrawlSummary) -> String {
    let headline = match summary.outcome {
        CrawlOutcome::Completed => "Crawl completed.",
        CrawlOutcome::Cancelled => "Crawling stopped by user.",
    };
    format_findings(headline, &summary.report)
}

/// Renders what a crashed crawl gathered before it died
pub fn format_failed_summary(report: &CrawlReport) -> String {
    format_findings("Crawl failed.", report)
}

fn format_findings(headline: &str, report: &CrawlReport) -> String {
    let mut out = format!("{}\n", headline);
    out.push_str(&format!("Pages visited: {}\n", report.pages_visited));

    push_list(&mut out, "Emails Found", &report.emails);
    push_list(&mut out, "Phone Numbers Found", &report.phones);

    if !report.failures.is_empty() {
        out.push_str(&format!("\nFetch Errors ({}):\n", report.failures.len()));
        for failure in &report.failures {
            out.push_str(&format!("  {}\n", failure));
        }
    }

    out
}

/// Prints the end-of-run summary to stdout
pub fn print_summary(summary: &CrawlSummary) {
    print!("{}", format_summary(summary));
}

/// Prints the partial summary of a crawl whose worker died
pub fn print_failed_summary(report: &CrawlReport) {
    print!("{}", format_failed_summary(report));
}

/// Prints a one-line progress view of a live snapshot
pub fn print_progress(report: &CrawlReport) {
    println!(
        "Progress: {} pages, {} emails, {} phones",
        report.pages_visited,
        report.emails.len(),
        report.phones.len()
    );
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    out.push_str(&format!("\n{}:\n", title));
    if items.is_empty() {
        out.push_str("  (none)\n");
    }
    for item in items {
        out.push_str(&format!("  {}\n", item));
    }
}

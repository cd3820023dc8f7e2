//! Markdown report generation
//!
//! This module renders a `CrawlReport` as a human-readable markdown document:
//! generation date, totals, then the full email and phone lists.

use crate::output::OutputResult;
use crate::report::CrawlReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report to `output_path`
///
/// # Arguments
///
/// * `report` - The crawl snapshot to render
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to write the report
pub fn write_markdown_report(report: &CrawlReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
///
/// Sections with nothing to list are left out.
pub fn format_markdown_report(report: &CrawlReport) -> String {
    let mut md = String::new();

    md.push_str("# Web Crawler Report\n\n");
    md.push_str(&format!(
        "- **Date**: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    md.push_str(&format!(
        "- **Total Pages Visited**: {}\n",
        report.pages_visited
    ));
    md.push_str(&format!("- **Total Emails Found**: {}\n", report.emails.len()));
    md.push_str(&format!(
        "- **Total Phone Numbers Found**: {}\n\n",
        report.phones.len()
    ));

    if !report.emails.is_empty() {
        md.push_str("## Emails\n\n");
        for email in &report.emails {
            md.push_str(&format!("- {}\n", email));
        }
        md.push('\n');
    }

    if !report.phones.is_empty() {
        md.push_str("## Phone Numbers\n\n");
        for phone in &report.phones {
            md.push_str(&format!("- {}\n", phone));
        }
        md.push('\n');
    }

    if !report.failures.is_empty() {
        md.push_str("## Fetch Errors\n\n");
        md.push_str("| URL | Cause |\n");
        md.push_str("|-----|-------|\n");
        for failure in &report.failures {
            md.push_str(&format!(
                "| {} | {} |\n",
                failure.url,
                failure.cause.replace('|', "\\|")
            ));
        }
        md.push('\n');
    }

    md
}

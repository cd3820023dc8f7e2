//! Output module for rendering crawl results
//!
//! This module handles:
//! - Printing the end-of-run summary and live progress to the console
//! - Exporting a crawl report as a markdown document

mod console;
mod markdown;

pub use console::{
    format_failed_summary, format_summary, print_failed_summary, print_progress, print_summary,
};
pub use markdown::{format_markdown_report, write_markdown_report};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

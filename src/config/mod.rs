//! Configuration module for SpiderSense
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting has a default, so the crawler also runs without a file.
//!
//! # Example
//!
//! ```no_run
//! use spider_sense::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("spider-sense.toml")).unwrap();
//! println!("User agent: {}", config.user_agent.header_value());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, UserAgentConfig, DEFAULT_CRAWLER_NAME,
    DEFAULT_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;

//! URL handling module for SpiderSense
//!
//! This module provides seed validation and the authority comparison used to
//! keep a crawl on its starting site.

mod authority;
mod seed;

pub use authority::{authority, in_scope, is_web_scheme};
pub use seed::validate_seed_url;

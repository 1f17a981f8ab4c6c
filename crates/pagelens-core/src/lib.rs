//! # pagelens-core
//!
//! Core library for fetching a single web page and summarizing its markup.
//!
//! This library provides:
//! - Bounded fetching (timeout, body size cap) with failure classification
//! - DOCTYPE-based HTML version detection
//! - Title, heading, link and login-form analysis over the parsed tree
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() {
//! let report = pagelens_core::analyze_url("example.com").await;
//!
//! if report.is_success() {
//!     println!("{} ({})", report.title, report.html_version);
//! } else {
//!     eprintln!("{}", report.error);
//! }
//! # }
//! ```

pub mod analyze;
pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod types;
pub mod url_utils;
pub mod version;

// Re-export commonly used types
pub use analyze::{Analyzer, analyze_document, analyze_url};
pub use config::FetchConfig;
pub use error::{AnalysisError, FailureKind};
pub use types::{AnalysisReport, HeadingCounts, LinkCounts};
pub use version::HtmlVersion;

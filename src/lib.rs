//! # toolbelt
//!
//! Personal command-line conveniences, consolidated into one binary:
//!
//! - `toolbelt display arrange` — reposition the secondary display relative
//!   to the primary one via `displayplacer`.
//! - `toolbelt git checkout` — `git checkout` with fuzzy branch-name
//!   matching when the exact name fails.
//! - `toolbelt s3 uri` — rewrite S3 HTTP URLs into `s3://` URIs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod display;
pub mod git;
pub mod s3;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of toolbelt.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

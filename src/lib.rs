//! Resolve the download URL of the latest Linux release advertised on a
//! vendor release page.
//!
//! # Modules
//!
//! - [`config`]: defaults, JSON config file, config paths
//! - [`error`]: error types for fetching, parsing and configuration
//! - [`extract`]: strategies that find release candidates in the page
//! - [`logging`]: tracing subscriber setup
//! - [`page`]: fetching the release page
//! - [`resolver`]: ties fetching, extraction and selection together
//! - [`version`]: version parsing and latest-candidate selection

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod page;
pub mod resolver;
pub mod version;

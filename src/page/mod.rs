//! Release page fetching
//!
//! - [`source`]: `PageSource` trait, mocked in resolver tests
//! - [`http`]: reqwest implementation used by the binary

pub mod http;
pub mod source;

pub use http::HttpPageSource;
pub use source::PageSource;

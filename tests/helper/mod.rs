//! Test helper modules

#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod page;

pub use fixtures::*;
pub use page::*;

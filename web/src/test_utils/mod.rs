//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks instead of mockall: the port trait takes `&str` parameters
//! that fight mockall's lifetime handling, and hand-written fakes are
//! explicit about what they return.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Adapters layer
//!
//! Concrete implementations of the domain ports for external systems.

pub mod backend;

pub use backend::BackendClient;

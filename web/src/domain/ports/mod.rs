//! Domain ports (traits)
//!
//! Port traits define the interfaces the application layer depends on.
//! Adapters provide the concrete implementations.

pub mod blogs;

pub use blogs::BlogStore;

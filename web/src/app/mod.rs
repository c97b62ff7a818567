//! Application layer
//!
//! Services and shared state that sit between the HTTP handlers and the
//! domain ports.

pub mod navigation;
pub mod pages;

pub use navigation::MenuSnapshot;
pub use pages::{ListPage, PageService};

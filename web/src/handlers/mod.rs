//! HTTP handlers
//!
//! Axum request handlers for the page routes.

pub mod pages;

pub use pages::{get_blog, list_blogs};

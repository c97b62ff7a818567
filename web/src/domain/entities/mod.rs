//! Domain entities
//!
//! Pure domain models for the blog reading surface.

pub mod blog;

pub use blog::{Blog, BlogId, ContentType};

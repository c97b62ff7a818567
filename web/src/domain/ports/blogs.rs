//! Blog store port
//!
//! Interface for fetching blog records from the backend API. The reqwest
//! adapter implements it in production; tests use an in-memory store.

use async_trait::async_trait;

use crate::domain::entities::{Blog, BlogId};
use crate::error::BackendError;

/// Read access to the blog backend
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// List blogs in the order the backend returns them, optionally
    /// filtered to a single category
    async fn list_blogs(&self, category: Option<&str>) -> Result<Vec<Blog>, BackendError>;

    /// Fetch a single blog by id
    async fn get_blog(&self, id: BlogId) -> Result<Blog, BackendError>;
}

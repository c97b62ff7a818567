//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Blog, BlogId};
use crate::domain::ports::BlogStore;
use crate::error::BackendError;
use crate::view::{RenderTarget, TextBlock};

// ============================================================================
// In-Memory Blog Store
// ============================================================================

/// In-memory blog store that mimics the backend's category filtering
#[derive(Default)]
pub struct InMemoryBlogStore {
    blogs: Arc<RwLock<Vec<Blog>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store with blogs
    pub fn with_blogs(self, blogs: Vec<Blog>) -> Self {
        self.blogs.write().unwrap().extend(blogs);
        self
    }

    /// Create a store whose every request fails
    pub fn failing() -> Self {
        let store = Self::default();
        *store.should_fail.write().unwrap() = true;
        store
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn list_blogs(&self, category: Option<&str>) -> Result<Vec<Blog>, BackendError> {
        if *self.should_fail.read().unwrap() {
            return Err(BackendError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        let blogs = self.blogs.read().unwrap();
        Ok(blogs
            .iter()
            .filter(|b| category.map_or(true, |c| b.category == c))
            .cloned()
            .collect())
    }

    async fn get_blog(&self, id: BlogId) -> Result<Blog, BackendError> {
        if *self.should_fail.read().unwrap() {
            return Err(BackendError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        let blogs = self.blogs.read().unwrap();
        blogs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(BackendError::BlogNotFound(id.0))
    }
}

// ============================================================================
// Recording Render Target
// ============================================================================

/// One render operation captured by [`RecordingTarget`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Image { src: String, alt: String },
    Video { src: String },
    Caption(String),
    Text { truncated: bool },
}

/// Render target that records dispatch calls instead of emitting markup
#[derive(Default)]
pub struct RecordingTarget {
    pub ops: Vec<RenderOp>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderTarget for RecordingTarget {
    fn image(&mut self, src: &str, alt: &str) {
        self.ops.push(RenderOp::Image {
            src: src.to_string(),
            alt: alt.to_string(),
        });
    }

    fn video(&mut self, src: &str) {
        self.ops.push(RenderOp::Video {
            src: src.to_string(),
        });
    }

    fn caption(&mut self, text: &str) {
        self.ops.push(RenderOp::Caption(text.to_string()));
    }

    fn text(&mut self, block: &TextBlock) {
        self.ops.push(RenderOp::Text {
            truncated: matches!(block, TextBlock::Truncated { .. }),
        });
    }
}

//! Page service
//!
//! Orchestration for the two pages: fetches records through the blog store
//! port and folds each batch into the shared category menu. Each list load
//! draws a navigation sequence number before fetching, so when loads finish
//! out of order the newest navigation keeps the active filter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::app::navigation::{CategoryMenu, MenuSnapshot};
use crate::domain::entities::{Blog, BlogId};
use crate::domain::ports::BlogStore;
use crate::error::BackendError;

/// Everything the list page renders
#[derive(Debug, Clone)]
pub struct ListPage {
    pub blogs: Vec<Blog>,
    pub menu: MenuSnapshot,
}

/// Service backing the list and detail pages
pub struct PageService<S: BlogStore> {
    store: Arc<S>,
    menu: RwLock<CategoryMenu>,
    nav_seq: AtomicU64,
}

impl<S: BlogStore> PageService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            menu: RwLock::new(CategoryMenu::new()),
            nav_seq: AtomicU64::new(0),
        }
    }

    /// Load the (optionally filtered) blog list and update the menu.
    ///
    /// A failed fetch returns before the menu is touched. A stale load
    /// still contributes its categories but cannot move the active filter.
    pub async fn list_page(&self, category: Option<&str>) -> Result<ListPage, BackendError> {
        let nav = self.nav_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let blogs = self.store.list_blogs(category).await?;
        tracing::debug!(
            "Loaded {} blogs (category: {:?}, nav {})",
            blogs.len(),
            category,
            nav
        );

        let menu = {
            let mut menu = self.menu.write().await;
            menu.observe(&blogs);
            menu.activate(nav, category);
            menu.snapshot()
        };

        Ok(ListPage { blogs, menu })
    }

    /// Snapshot the menu as it stands, without loading anything
    pub async fn menu_snapshot(&self) -> MenuSnapshot {
        self.menu.read().await.snapshot()
    }

    /// Load a single blog for the detail page
    pub async fn blog_page(&self, id: BlogId) -> Result<Blog, BackendError> {
        self.store.get_blog(id).await
    }
}

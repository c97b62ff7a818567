//! Navigation menu state
//!
//! The category menu lives for the whole process: every batch of fetched
//! blogs contributes its categories, in first-seen order, and the menu
//! remembers which filter is currently active. Activation carries a
//! navigation sequence number so a slow, older load can never overwrite
//! the highlight set by a newer one.

use crate::domain::entities::Blog;

/// Category menu accumulated from every blog batch observed so far
#[derive(Debug, Default)]
pub struct CategoryMenu {
    categories: Vec<String>,
    active: Option<String>,
    last_nav: u64,
}

/// Point-in-time copy of the menu, handed to the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSnapshot {
    pub categories: Vec<String>,
    pub active: Option<String>,
}

impl CategoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a fetched batch into the menu.
    ///
    /// Categories are deduplicated by exact string and keep the order in
    /// which they were first seen. Entries are never removed.
    pub fn observe(&mut self, blogs: &[Blog]) {
        for blog in blogs {
            if !self.categories.iter().any(|c| c == &blog.category) {
                self.categories.push(blog.category.clone());
            }
        }
    }

    /// Set the active filter on behalf of navigation `nav`.
    ///
    /// Returns false, leaving the filter unchanged, if a later navigation
    /// already set it.
    pub fn activate(&mut self, nav: u64, category: Option<&str>) -> bool {
        if nav < self.last_nav {
            return false;
        }
        self.last_nav = nav;
        self.active = category.map(str::to_string);
        true
    }

    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            categories: self.categories.clone(),
            active: self.active.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_blog_in;

    // ===== observe tests =====

    #[test]
    fn observe_keeps_first_seen_order() {
        let mut menu = CategoryMenu::new();
        menu.observe(&[
            test_blog_in(1, "travel"),
            test_blog_in(2, "food"),
            test_blog_in(3, "travel"),
        ]);

        assert_eq!(menu.snapshot().categories, vec!["travel", "food"]);
    }

    #[test]
    fn observe_merges_across_batches() {
        let mut menu = CategoryMenu::new();
        menu.observe(&[test_blog_in(1, "travel")]);
        menu.observe(&[test_blog_in(2, "food"), test_blog_in(3, "travel")]);
        menu.observe(&[]);

        assert_eq!(menu.snapshot().categories, vec!["travel", "food"]);
    }

    #[test]
    fn observe_never_drops_categories() {
        let mut menu = CategoryMenu::new();
        menu.observe(&[test_blog_in(1, "travel"), test_blog_in(2, "food")]);
        // A filtered load returns a subset; the menu must keep the union.
        menu.observe(&[test_blog_in(2, "food")]);

        assert_eq!(menu.snapshot().categories, vec!["travel", "food"]);
    }

    // ===== activate tests =====

    #[test]
    fn activate_sets_and_clears_filter() {
        let mut menu = CategoryMenu::new();

        assert!(menu.activate(1, Some("food")));
        assert_eq!(menu.snapshot().active, Some("food".to_string()));

        assert!(menu.activate(2, None));
        assert_eq!(menu.snapshot().active, None);
    }

    #[test]
    fn stale_activation_is_refused() {
        let mut menu = CategoryMenu::new();

        assert!(menu.activate(2, Some("food")));
        assert!(!menu.activate(1, Some("travel")));

        assert_eq!(menu.snapshot().active, Some("food".to_string()));
    }

    #[test]
    fn reactivation_with_same_nav_is_allowed() {
        let mut menu = CategoryMenu::new();

        assert!(menu.activate(1, Some("food")));
        assert!(menu.activate(1, Some("travel")));

        assert_eq!(menu.snapshot().active, Some("travel".to_string()));
    }
}

//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Blog, BlogId, ContentType};

/// Create a test blog with default values (a short text post)
pub fn test_blog() -> Blog {
    Blog {
        id: BlogId(1),
        title: "Test Story".to_string(),
        category: "general".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
        content_type: ContentType::Text,
        content_url: None,
        caption: None,
        text_content: Some("A short story.".to_string()),
    }
}

/// Create a test blog with a specific id and category
pub fn test_blog_in(id: i64, category: &str) -> Blog {
    Blog {
        id: BlogId(id),
        title: format!("Story {}", id),
        category: category.to_string(),
        ..test_blog()
    }
}

/// Create a test image blog with a relative content URL and a caption
pub fn test_image_blog(id: i64) -> Blog {
    Blog {
        id: BlogId(id),
        title: format!("Image Story {}", id),
        content_type: ContentType::Image,
        content_url: Some("photo.jpg".to_string()),
        caption: Some("A photo".to_string()),
        text_content: None,
        ..test_blog()
    }
}

/// Create a test video blog without a caption
pub fn test_video_blog(id: i64) -> Blog {
    Blog {
        id: BlogId(id),
        title: format!("Video Story {}", id),
        content_type: ContentType::Video,
        content_url: Some("clip.mp4".to_string()),
        caption: None,
        text_content: None,
        ..test_blog()
    }
}

/// Create a test text blog with an exact word count ("word1 word2 ...")
pub fn test_text_blog(id: i64, words: usize) -> Blog {
    let text = (1..=words)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ");
    Blog {
        id: BlogId(id),
        title: format!("Text Story {}", id),
        content_type: ContentType::Text,
        text_content: Some(text),
        ..test_blog()
    }
}

/// Create a test blog combining an image, a caption and counted text
pub fn test_image_text_blog(id: i64, words: usize) -> Blog {
    Blog {
        id: BlogId(id),
        title: format!("Mixed Story {}", id),
        content_type: ContentType::ImageText,
        content_url: Some("photo.jpg".to_string()),
        caption: Some("A photo".to_string()),
        ..test_text_blog(id, words)
    }
}

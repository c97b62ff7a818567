//! HTML rendering for the blog pages
//!
//! Pure functions from domain data to markup strings. Content-type dispatch
//! goes through the [`RenderTarget`] trait so the branching is testable
//! without string matching; `CardTarget` and `PostTarget` are the markup
//! implementations for the list and detail views.

use chrono::{DateTime, Utc};
use urlencoding::encode;

use crate::app::{ListPage, MenuSnapshot};
use crate::domain::entities::{Blog, ContentType};

/// Word limit for text previews on the list page
pub const PREVIEW_WORD_LIMIT: usize = 50;

/// Context shared by every page render
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Backend origin; relative media URLs and error diagnostics use it
    pub origin: String,
    /// Optional byline shown on each card
    pub author: Option<String>,
}

impl PageContext {
    pub fn new(origin: String, author: Option<String>) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            author,
        }
    }
}

/// Text content prepared for rendering
#[derive(Debug, Clone, PartialEq)]
pub enum TextBlock {
    /// Shown whole, no toggle
    Whole(String),
    /// Over the preview limit: the short form plus the full text behind a toggle
    Truncated { preview: String, full: String },
}

impl TextBlock {
    /// Split for the list view.
    ///
    /// Words are counted by splitting on single spaces, so runs of
    /// whitespace produce empty words that count against the limit.
    pub fn preview_of(text: &str) -> Self {
        let words: Vec<&str> = text.split(' ').collect();
        if words.len() > PREVIEW_WORD_LIMIT {
            TextBlock::Truncated {
                preview: format!("{}...", words[..PREVIEW_WORD_LIMIT].join(" ")),
                full: text.to_string(),
            }
        } else {
            TextBlock::Whole(text.to_string())
        }
    }

    /// Wrap text untruncated, as the detail view shows it
    pub fn whole(text: &str) -> Self {
        TextBlock::Whole(text.to_string())
    }
}

/// Sink for the content-type dispatch, one call per sub-element
pub trait RenderTarget {
    fn image(&mut self, src: &str, alt: &str);
    fn video(&mut self, src: &str);
    fn caption(&mut self, text: &str);
    fn text(&mut self, block: &TextBlock);
}

/// Resolve a content URL against the backend origin.
///
/// Absolute URLs pass through untouched; anything else is served from the
/// backend's uploads path.
pub fn media_url(origin: &str, content_url: &str) -> String {
    if content_url.starts_with("http://") || content_url.starts_with("https://") {
        content_url.to_string()
    } else {
        format!("{}/uploads/{}", origin.trim_end_matches('/'), content_url)
    }
}

/// Treat present-but-empty optional fields as absent
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Dispatch a blog's content into a render target.
///
/// Branches on `content_type`. A missing or empty optional field drops its
/// sub-element (captions belong to their media, so they drop with it), and
/// unrecognized types produce no content at all. `truncate_text` selects
/// the list-view preview split; the detail view passes text through whole.
pub fn render_content(blog: &Blog, origin: &str, truncate_text: bool, out: &mut dyn RenderTarget) {
    let text_block = |text: &str| {
        if truncate_text {
            TextBlock::preview_of(text)
        } else {
            TextBlock::whole(text)
        }
    };

    match &blog.content_type {
        ContentType::Image => {
            if let Some(url) = non_empty(&blog.content_url) {
                out.image(&media_url(origin, url), &blog.title);
                if let Some(caption) = non_empty(&blog.caption) {
                    out.caption(caption);
                }
            }
        }
        ContentType::Video => {
            if let Some(url) = non_empty(&blog.content_url) {
                out.video(&media_url(origin, url));
                if let Some(caption) = non_empty(&blog.caption) {
                    out.caption(caption);
                }
            }
        }
        ContentType::Text => {
            if let Some(text) = non_empty(&blog.text_content) {
                out.text(&text_block(text));
            }
        }
        ContentType::ImageText => {
            if let Some(url) = non_empty(&blog.content_url) {
                out.image(&media_url(origin, url), &blog.title);
                if let Some(caption) = non_empty(&blog.caption) {
                    out.caption(caption);
                }
            }
            if let Some(text) = non_empty(&blog.text_content) {
                out.text(&text_block(text));
            }
        }
        ContentType::Other(_) => {}
    }
}

/// Long en-US date, e.g. "March 5, 2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncated previews ship collapsed; the embedded script swaps the spans
/// and the button label in the browser.
fn text_markup(block: &TextBlock) -> String {
    let mut buf = String::from("<div class=\"blog-text-preview\">");
    match block {
        TextBlock::Whole(text) => {
            buf.push_str(&format!(
                "<span class=\"preview-text\">{}</span>",
                html_escape(text)
            ));
        }
        TextBlock::Truncated { preview, full } => {
            buf.push_str(&format!(
                "<span class=\"preview-text\">{}</span>",
                html_escape(preview)
            ));
            buf.push_str(&format!(
                "<span class=\"full-text\" style=\"display:none\">{}</span>",
                html_escape(full)
            ));
            buf.push_str("<button class=\"read-more-btn\" type=\"button\">Read more</button>");
        }
    }
    buf.push_str("</div>");
    buf
}

/// Render target writing the list-card markup
#[derive(Default)]
struct CardTarget {
    buf: String,
}

impl RenderTarget for CardTarget {
    fn image(&mut self, src: &str, alt: &str) {
        self.buf.push_str(&format!(
            "<img class=\"blog-image-preview\" src=\"{}\" alt=\"{}\">",
            html_escape(src),
            html_escape(alt)
        ));
    }

    fn video(&mut self, src: &str) {
        self.buf.push_str(&format!(
            "<video class=\"blog-video-preview\" src=\"{}\" muted playsinline></video>",
            html_escape(src)
        ));
    }

    fn caption(&mut self, text: &str) {
        self.buf.push_str(&format!(
            "<div class=\"blog-caption\">{}</div>",
            html_escape(text)
        ));
    }

    fn text(&mut self, block: &TextBlock) {
        self.buf.push_str(&text_markup(block));
    }
}

/// Render target writing the detail-page markup
#[derive(Default)]
struct PostTarget {
    buf: String,
}

impl RenderTarget for PostTarget {
    fn image(&mut self, src: &str, alt: &str) {
        self.buf.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            html_escape(src),
            html_escape(alt)
        ));
    }

    fn video(&mut self, src: &str) {
        self.buf.push_str(&format!(
            "<video src=\"{}\" controls style=\"width:100%\"></video>",
            html_escape(src)
        ));
    }

    fn caption(&mut self, text: &str) {
        self.buf
            .push_str(&format!("<div class=\"caption\">{}</div>", html_escape(text)));
    }

    fn text(&mut self, block: &TextBlock) {
        let text = match block {
            TextBlock::Whole(text) => text,
            TextBlock::Truncated { full, .. } => full,
        };
        self.buf.push_str(&format!(
            "<div class=\"text-content\">{}</div>",
            html_escape(text)
        ));
    }
}

/// Render one list card
pub fn render_card(blog: &Blog, ctx: &PageContext) -> String {
    let mut buf = String::from("<div class=\"blog-card\">");

    buf.push_str("<div class=\"blog-meta\">");
    buf.push_str(&format!(
        "<span class=\"category-tag\">{}</span>",
        html_escape(&blog.category)
    ));
    if let Some(author) = &ctx.author {
        buf.push_str(&format!(
            "<span class=\"blog-author\">by {}</span>",
            html_escape(author)
        ));
    }
    buf.push_str(&format!(
        "<span class=\"blog-date\">{}</span>",
        format_date(&blog.created_at)
    ));
    buf.push_str("</div>");

    buf.push_str(&format!(
        "<h2 class=\"blog-title\"><a href=\"/blog/{}\">{}</a></h2>",
        blog.id,
        html_escape(&blog.title)
    ));

    let mut target = CardTarget::default();
    render_content(blog, &ctx.origin, true, &mut target);
    buf.push_str(&format!("<div class=\"blog-preview\">{}</div>", target.buf));

    buf.push_str("</div>");
    buf
}

fn render_menu(menu: &MenuSnapshot) -> String {
    let mut buf = String::from("<nav class=\"nav-menu\">");
    let home_class = if menu.active.is_none() {
        "nav-link active"
    } else {
        "nav-link"
    };
    buf.push_str(&format!("<a class=\"{}\" href=\"/\">Home</a>", home_class));

    for category in &menu.categories {
        let class = if menu.active.as_deref() == Some(category.as_str()) {
            "nav-link active"
        } else {
            "nav-link"
        };
        buf.push_str(&format!(
            "<a class=\"{}\" href=\"/?category={}\">{}</a>",
            class,
            encode(category),
            html_escape(category)
        ));
    }

    buf.push_str("</nav>");
    buf
}

fn page_shell(title: &str, nav: &str, main: &str, script: &str) -> String {
    let script_tag = if script.is_empty() {
        String::new()
    } else {
        format!("<script>{}</script>\n", script)
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n\
         <header><h1><a href=\"/\">Stories</a></h1>{}</header>\n\
         <main>{}</main>\n{}</body>\n</html>\n",
        html_escape(title),
        PAGE_STYLE,
        nav,
        main,
        script_tag
    )
}

/// Render the full list page
pub fn render_list_page(page: &ListPage, ctx: &PageContext) -> String {
    let nav = render_menu(&page.menu);
    let main = if page.blogs.is_empty() {
        "<div class=\"empty-state\"><p>No stories yet. Check back soon!</p></div>".to_string()
    } else {
        let mut buf = String::from("<div class=\"blogs-container\">");
        for blog in &page.blogs {
            buf.push_str(&render_card(blog, ctx));
        }
        buf.push_str("</div>");
        buf
    };
    // Only the list view has previews to expand, so only it ships the script.
    page_shell("Stories", &nav, &main, READ_MORE_JS)
}

/// Render the list page's failure state.
///
/// The menu still shows whatever categories earlier loads accumulated.
pub fn render_list_error(reason: &str, menu: &MenuSnapshot, ctx: &PageContext) -> String {
    let nav = render_menu(menu);
    let main = format!(
        "<p class=\"error\">Failed to load stories. Error: {}<br>API URL: {}<br>\
         Check the server logs for more details.</p>",
        html_escape(reason),
        html_escape(&ctx.origin)
    );
    page_shell("Stories", &nav, &main, "")
}

/// Render the full detail page for one post
pub fn render_post_page(blog: &Blog, ctx: &PageContext) -> String {
    let mut main = String::from("<article class=\"blog-post\">");
    main.push_str(&format!(
        "<span class=\"category-tag\">{}</span>",
        html_escape(&blog.category)
    ));
    main.push_str(&format!(
        "<h1 class=\"blog-title\">{}</h1>",
        html_escape(&blog.title)
    ));
    main.push_str(&format!(
        "<div class=\"blog-date\">{}</div>",
        format_date(&blog.created_at)
    ));

    let mut target = PostTarget::default();
    render_content(blog, &ctx.origin, false, &mut target);
    main.push_str(&format!("<div class=\"blog-content\">{}</div>", target.buf));

    main.push_str("</article>");

    let nav = render_menu(&MenuSnapshot::default());
    page_shell(&blog.title, &nav, &main, "")
}

/// Render the detail page's not-found state
pub fn render_post_error() -> String {
    let nav = render_menu(&MenuSnapshot::default());
    let main = "<div class=\"error\"><p>Blog post not found.</p>\
                <a href=\"/\">Back to all stories</a></div>";
    page_shell("Story not found", &nav, main, "")
}

const PAGE_STYLE: &str = r#"
:root { --accent: #2563eb; --text: #1f2430; --muted: #6b7280; --line: #e5e7eb; }
* { box-sizing: border-box; }
body { margin: 0; font-family: Georgia, 'Times New Roman', serif; color: var(--text); background: #faf9f7; }
header { max-width: 720px; margin: 0 auto; padding: 24px 16px 8px; }
header h1 { margin: 0 0 12px; }
header h1 a { color: inherit; text-decoration: none; }
main { max-width: 720px; margin: 0 auto; padding: 8px 16px 48px; }
.nav-menu { display: flex; flex-wrap: wrap; gap: 4px 14px; border-bottom: 1px solid var(--line); padding-bottom: 10px; }
.nav-link { color: var(--muted); text-decoration: none; font-size: 15px; }
.nav-link.active { color: var(--accent); font-weight: bold; }
.blog-card { border-bottom: 1px solid var(--line); padding: 24px 0; }
.blog-meta { display: flex; gap: 12px; align-items: baseline; font-size: 13px; color: var(--muted); }
.category-tag { background: var(--accent); color: #fff; padding: 2px 8px; border-radius: 10px; font-size: 12px; }
.blog-title { margin: 10px 0; }
.blog-title a { color: inherit; text-decoration: none; }
.blog-image-preview, .blog-video-preview { width: 100%; border-radius: 6px; margin-top: 8px; }
.blog-caption, .caption { font-size: 13px; color: var(--muted); font-style: italic; margin-top: 4px; }
.blog-text-preview { margin-top: 8px; line-height: 1.6; }
.read-more-btn { display: block; margin-top: 8px; border: none; background: none; color: var(--accent); cursor: pointer; padding: 0; font: inherit; }
.empty-state, .error { text-align: center; color: var(--muted); padding: 48px 0; }
.blog-post img, .blog-post video { max-width: 100%; border-radius: 6px; }
.text-content { line-height: 1.7; white-space: pre-wrap; }
"#;

const READ_MORE_JS: &str = r#"
document.addEventListener('click', function (event) {
  var btn = event.target;
  if (!btn.classList || !btn.classList.contains('read-more-btn')) return;
  var wrap = btn.closest('.blog-text-preview');
  if (!wrap) return;
  var preview = wrap.querySelector('.preview-text');
  var full = wrap.querySelector('.full-text');
  if (full.style.display === 'none') {
    full.style.display = 'inline';
    preview.style.display = 'none';
    btn.textContent = 'Read less';
  } else {
    full.style.display = 'none';
    preview.style.display = 'inline';
    btn.textContent = 'Read more';
  }
});
"#;

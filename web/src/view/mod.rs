//! View layer
//!
//! Server-side HTML rendering for the list and detail pages.

pub mod renderer;

pub use renderer::{
    render_list_error, render_list_page, render_post_error, render_post_page, PageContext,
    RenderTarget, TextBlock,
};

//! Page handlers
//!
//! Server-rendered routes for the blog front-end. Every route also answers
//! `Accept: application/json` with the raw backend records, which keeps the
//! service scriptable without scraping HTML.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::BlogId;
use crate::domain::ports::BlogStore;
use crate::error::{AppError, BackendError};
use crate::view::{render_list_error, render_list_page, render_post_error, render_post_page};
use crate::AppState;

/// Check if the client wants a JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// Query parameters for the list page
#[derive(Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// GET / - the blog list, optionally filtered by category
pub async fn list_blogs<S: BlogStore + 'static>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    // An empty ?category= means no filter, same as the bare path.
    let category = params.category.as_deref().filter(|c| !c.is_empty());

    match state.pages.list_page(category).await {
        Ok(page) => {
            if wants_json(&headers) {
                Ok(Json(page.blogs).into_response())
            } else {
                Ok(Html(render_list_page(&page, &state.page_ctx)).into_response())
            }
        }
        Err(err) => {
            tracing::error!(
                "Failed to load blogs from {}: {}",
                state.page_ctx.origin,
                err
            );
            if wants_json(&headers) {
                Err(AppError::Backend(err))
            } else {
                // Keep the menu from earlier loads visible around the panel.
                let menu = state.pages.menu_snapshot().await;
                Ok((
                    StatusCode::BAD_GATEWAY,
                    Html(render_list_error(&err.to_string(), &menu, &state.page_ctx)),
                )
                    .into_response())
            }
        }
    }
}

/// GET /blog/:id - one post, full content
pub async fn get_blog<S: BlogStore + 'static>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.pages.blog_page(BlogId(id)).await {
        Ok(blog) => {
            if wants_json(&headers) {
                Ok(Json(blog).into_response())
            } else {
                Ok(Html(render_post_page(&blog, &state.page_ctx)).into_response())
            }
        }
        Err(err) => {
            tracing::warn!("Failed to load blog {}: {}", id, err);
            if wants_json(&headers) {
                match err {
                    BackendError::BlogNotFound(_) => Err(AppError::NotFound(format!("blog {}", id))),
                    other => Err(AppError::Backend(other)),
                }
            } else {
                // The visitor gets the same page whether the post is missing
                // or the backend is down.
                Ok((StatusCode::NOT_FOUND, Html(render_post_error())).into_response())
            }
        }
    }
}

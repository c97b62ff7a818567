//! Blog backend API client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::{Blog, BlogId};
use crate::domain::ports::BlogStore;
use crate::error::BackendError;

/// HTTP implementation of [`BlogStore`] against the backend's JSON API
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn blogs_url(&self, category: Option<&str>) -> String {
        match category {
            Some(c) => format!("{}?category={}", self.api_url("/blogs"), encode(c)),
            None => self.api_url("/blogs"),
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| BackendError::Deserialization(e.to_string()))
        } else {
            // Prefer the backend's error body, fall back to the status text
            let message = response.text().await.unwrap_or_default();
            let message = if message.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                message
            };
            Err(BackendError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl BlogStore for BackendClient {
    async fn list_blogs(&self, category: Option<&str>) -> Result<Vec<Blog>, BackendError> {
        let resp = self.http.get(self.blogs_url(category)).send().await?;
        self.handle_response(resp).await
    }

    async fn get_blog(&self, id: BlogId) -> Result<Blog, BackendError> {
        let url = self.api_url(&format!("/blogs/{}", id));
        let resp = self.http.get(url).send().await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::BlogNotFound(id.0));
        }

        self.handle_response(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_path() {
        let client = BackendClient::new("http://localhost:8000".to_string());
        assert_eq!(client.api_url("/blogs"), "http://localhost:8000/api/blogs");
    }

    #[test]
    fn new_strips_trailing_slash() {
        let client = BackendClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.blogs_url(None), "http://localhost:8000/api/blogs");
    }

    #[test]
    fn blogs_url_encodes_category() {
        let client = BackendClient::new("http://localhost:8000".to_string());
        assert_eq!(
            client.blogs_url(Some("Tech & Life")),
            "http://localhost:8000/api/blogs?category=Tech%20%26%20Life"
        );
    }
}

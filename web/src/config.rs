//! Application configuration loaded from the environment

use std::env;

#[derive(Clone)]
pub struct Config {
    /// Origin of the blog backend API. Every API request and relative
    /// media URL is resolved against this.
    pub api_base_url: String,
    /// Byline shown on each blog card when set
    pub site_author: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            site_author: env::var("SITE_AUTHOR").ok(),
        }
    }
}

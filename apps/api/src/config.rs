use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Name of the environment variable holding the Groq API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Application configuration loaded from environment variables.
///
/// This is the only place the process environment is read. The API key is
/// optional here: a missing key does not stop the server from starting, it
/// surfaces as a `ConfigurationMissing` error when a recommendation is requested.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env(API_KEY_VAR),
            groq_base_url: optional_env("GROQ_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The API key, if one is configured and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.groq_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

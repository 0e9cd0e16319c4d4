// src/config.rs
use crate::filter::FilterMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

const DEFAULT_API_URL: &str = "https://joboard-api.onrender.com/jobs";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// What to show when the one-shot load fails. One policy per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Substitute the fixed demo dataset and flag demo mode.
    #[default]
    Demo,
    /// Substitute an empty working set; no fabricated postings.
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub fallback: FallbackPolicy,
    #[serde(default)]
    pub filter_mode: FilterMode,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout(),
            fallback: FallbackPolicy::default(),
            filter_mode: FilterMode::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration for the current environment. A missing config
    /// file is not an error: the built-in defaults describe the public
    /// deployment. `JOBOARD_API_URL` overrides the endpoint either way.
    pub fn load(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml(&content, &environment)?
        } else {
            info!("{} not found, using built-in defaults", path.display());
            Self::default()
        };

        if let Ok(url) = std::env::var("JOBOARD_API_URL") {
            config.api_url = url;
        }

        Ok(config)
    }

    /// Parse a config file and pick the section for `environment`.
    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config file")?;

        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    fn get_environment() -> String {
        std::env::var("JOBOARD_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }
}

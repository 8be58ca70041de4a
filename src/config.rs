//! Configuration Management
//!
//! Loads and manages pipeline configuration from TOML files.
//! Configuration includes:
//! - API settings (endpoint, model, temperature, credential)
//! - Prompt budget (maximum page-content characters embedded per prompt)
//! - Page fetch behavior (navigation timeout)
//!
//! The API credential is injected here once and carried explicitly through
//! the pipeline; no pipeline stage reads the process environment itself.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature. Kept low to bias toward deterministic,
    /// syntactically conservative output.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    pub api_key: Option<String>,

    /// Maximum number of characters of sanitized page content embedded in
    /// a prompt. Content beyond this is cut off, not summarized.
    #[serde(default = "default_page_char_budget")]
    pub page_char_budget: usize,

    /// Upper bound on page navigation, in seconds.
    #[serde(default = "default_nav_timeout")]
    pub nav_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.siliconflow.cn/v1".to_string()
}

fn default_model() -> String {
    "Pro/deepseek-ai/DeepSeek-R1".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_page_char_budget() -> usize {
    crate::prompt::DEFAULT_PAGE_CHAR_BUDGET
}

fn default_nav_timeout() -> u64 {
    crate::fetcher::DEFAULT_NAV_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            api_key: None,
            page_char_budget: default_page_char_budget(),
            nav_timeout_secs: default_nav_timeout(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                toml::from_str::<Config>(&content).context("Failed to parse config")?
            }
            None => {
                // Try default locations - expand ~ to actual home directory
                let home_config = dirs::home_dir()
                    .map(|h| h.join(".config/testforge/config.toml"))
                    .and_then(|p| p.to_str().map(String::from));

                let mut default_paths: Vec<&str> = vec!["testforge.toml"];
                let home_config_str: String;
                if let Some(ref hc) = home_config {
                    home_config_str = hc.clone();
                    default_paths.push(&home_config_str);
                }

                let mut loaded = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        loaded = Some(toml::from_str::<Config>(&content).context("Failed to parse config")?);
                        break;
                    }
                }
                loaded.unwrap_or_default()
            }
        };

        // Override with environment variables
        if let Ok(endpoint) = std::env::var("TESTFORGE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(model) = std::env::var("TESTFORGE_MODEL") {
            config.model = model;
        }
        if let Ok(api_key) = std::env::var("TESTFORGE_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(temp) = std::env::var("TESTFORGE_TEMPERATURE") {
            if let Ok(t) = temp.parse::<f32>() {
                config.temperature = t;
            }
        }
        if let Ok(budget) = std::env::var("TESTFORGE_PAGE_CHARS") {
            if let Ok(n) = budget.parse::<usize>() {
                config.page_char_budget = n;
            }
        }
        if let Ok(timeout) = std::env::var("TESTFORGE_NAV_TIMEOUT") {
            if let Ok(t) = timeout.parse::<u64>() {
                config.nav_timeout_secs = t;
            }
        }

        Ok(config)
    }
}

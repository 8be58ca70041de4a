//! Test Generation Pipeline
//!
//! The strictly sequential chain at the heart of testforge: fetch the page,
//! sanitize its markup, build the prompt, call the model, and clean the
//! reply into an executable script body. Each stage produces exactly one
//! artifact consumed by the next; the first failure aborts the run.

use tracing::{debug, info};

use crate::api::{ApiClient, LlmClient};
use crate::config::Config;
use crate::errors::{Result, TestforgeError};
use crate::extract::extract_code;
use crate::fetcher::PageFetcher;
use crate::prompt::build_prompt;
use crate::sanitizer::sanitize;

pub struct TestGenerator {
    config: Config,
    client: Box<dyn LlmClient>,
}

impl TestGenerator {
    /// Create a generator backed by the real completion endpoint.
    ///
    /// Fails with a configuration error when no API credential has been
    /// injected; the pipeline never reads the environment itself.
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self {
            config,
            client: Box::new(client),
        })
    }

    /// Create a generator with a caller-supplied client implementation.
    pub fn with_client(config: Config, client: Box<dyn LlmClient>) -> Self {
        Self { config, client }
    }

    /// Run the full pipeline: load `url`, then generate a script for
    /// `scenario` against its rendered markup.
    pub async fn generate(&self, url: &str, scenario: &str) -> Result<String> {
        info!("Loading page {}", url);
        let fetcher = PageFetcher::new(self.config.nav_timeout_secs);
        let raw_markup = fetcher.fetch(url).await?;
        self.generate_from_markup(&raw_markup, scenario).await
    }

    /// The browserless tail of the pipeline: sanitize already-fetched
    /// markup, prompt the model, and extract the script body.
    pub async fn generate_from_markup(&self, raw_markup: &str, scenario: &str) -> Result<String> {
        let sanitized = sanitize(raw_markup);
        debug!(
            "Sanitized markup: {} -> {} chars",
            raw_markup.len(),
            sanitized.len()
        );

        let prompt = build_prompt(&sanitized, scenario, self.config.page_char_budget);

        info!("Requesting script from {}", self.config.model);
        let reply = self
            .client
            .generate(&prompt)
            .await
            .map_err(TestforgeError::Generation)?;
        debug!("Model replied with {} chars", reply.len());

        Ok(extract_code(&reply))
    }
}

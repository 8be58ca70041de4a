//! Page Fetcher
//!
//! Drives a headless Chrome session to load a target URL and return its
//! rendered markup: the post-script-execution DOM serialization, not the
//! raw server response. Each fetch owns its own browser process, which is
//! launched at the start of the call and torn down on every exit path,
//! including failure. A single failed attempt is fatal; there is no retry.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::errors::PageLoadError;

pub const DEFAULT_NAV_TIMEOUT_SECS: u64 = 60;

pub struct PageFetcher {
    nav_timeout: Duration,
}

impl PageFetcher {
    pub fn new(nav_timeout_secs: u64) -> Self {
        Self {
            nav_timeout: Duration::from_secs(nav_timeout_secs),
        }
    }

    /// Load `url` in an isolated headless browser and return the rendered
    /// document markup.
    pub async fn fetch(&self, url: &str) -> Result<String, PageLoadError> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(|message| PageLoadError::Launch {
                url: url.to_string(),
                message,
            })?;

        info!("Launching headless browser for {}", url);
        let (mut browser, mut handler) = Browser::launch(config).await.map_err(|e| {
            PageLoadError::Launch {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        // The CDP handler task pumps WebSocket messages between us and the
        // browser; it must run for the lifetime of the browser connection.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    debug!("CDP handler event loop ended");
                    break;
                }
            }
        });

        let markup = self.load_page(&browser, url).await;

        // Release the browser on every exit path before returning.
        if let Err(e) = browser.close().await {
            warn!("Error closing browser: {}", e);
        }
        handler_task.abort();

        markup
    }

    async fn load_page(&self, browser: &Browser, url: &str) -> Result<String, PageLoadError> {
        let page =
            browser
                .new_page("about:blank")
                .await
                .map_err(|e| PageLoadError::Navigation {
                    url: url.to_string(),
                    message: format!("failed to open page: {}", e),
                })?;

        let navigated = tokio::time::timeout(self.nav_timeout, async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            Ok::<_, chromiumoxide::error::CdpError>(())
        })
        .await;

        match navigated {
            Err(_) => {
                return Err(PageLoadError::Timeout {
                    url: url.to_string(),
                    seconds: self.nav_timeout.as_secs(),
                })
            }
            Ok(Err(e)) => {
                return Err(PageLoadError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
            Ok(Ok(())) => {}
        }

        let markup = page.content().await.map_err(|e| PageLoadError::Navigation {
            url: url.to_string(),
            message: format!("failed to read page content: {}", e),
        })?;

        debug!("Fetched {} bytes of markup from {}", markup.len(), url);
        Ok(markup)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_TIMEOUT_SECS)
    }
}

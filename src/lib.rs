//! testforge - describe a UI test, get a runnable script
//!
//! Turns a natural-language test scenario plus a live web page's markup
//! into an executable browser-automation script by delegating code
//! synthesis to an LLM, then sanitizing the model's reply into a clean
//! script body.
//!
//! - **Fetch**: render the target page in an isolated headless browser
//! - **Sanitize**: reduce the markup to an allow-listed, script-free subset
//! - **Prompt**: compose the request under a fixed character budget
//! - **Generate**: one typed call to a chat-completion endpoint
//! - **Extract**: strip fence markers from the reply
//!
//! # Quick Start
//!
//! ```ignore
//! use testforge::{Config, TestGenerator};
//!
//! let mut config = Config::load(None)?;
//! config.api_key = Some(std::env::var("TESTFORGE_API_KEY")?);
//! let generator = TestGenerator::new(config)?;
//! let script = generator
//!     .generate("https://example.com", "fill the search box and submit")
//!     .await?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod fetcher;
pub mod generator;
pub mod prompt;
pub mod sanitizer;
pub mod telemetry;

pub use config::Config;
pub use errors::{GenerationError, PageLoadError, Result, TestforgeError};
pub use generator::TestGenerator;

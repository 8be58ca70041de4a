use thiserror::Error;

/// The central error type for the testforge pipeline.
///
/// Every stage fails fast: the first error aborts the generation run and
/// propagates to the caller unmodified. Nothing in the pipeline retries or
/// recovers partial results.
#[derive(Error, Debug)]
pub enum TestforgeError {
    #[error("Page load error: {0}")]
    PageLoad(#[from] PageLoadError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure while acquiring a page's rendered markup.
///
/// Each variant carries the target URL so a caller can report which page
/// broke without parsing message text.
#[derive(Error, Debug)]
pub enum PageLoadError {
    #[error("failed to launch browser for {url}: {message}")]
    Launch { url: String, message: String },

    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("navigation to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },
}

/// Failure while obtaining generated text from the completion endpoint.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("failed to parse API response: {0}")]
    Parse(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("response contained no generated text")]
    MissingContent,
}

pub type Result<T> = std::result::Result<T, TestforgeError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_API_ERROR: u8 = 4;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<TestforgeError>() {
        return match err {
            TestforgeError::Config(_) => EXIT_CONFIG_ERROR,
            TestforgeError::Generation(_) => EXIT_API_ERROR,
            TestforgeError::PageLoad(_) => EXIT_ERROR,
        };
    }
    if e.downcast_ref::<GenerationError>().is_some() {
        return EXIT_API_ERROR;
    }
    EXIT_ERROR
}

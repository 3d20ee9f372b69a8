use thiserror::Error;

/// Errors that can occur during a recipe import
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the page, or the server answered with a non-success status
    #[error("Failed to fetch the webpage: {0}")]
    Transport(#[from] reqwest::Error),

    /// The URL is on BBC Food but not a recipe page
    #[error("The provided URL is from the BBC Food website, but not a recipe URL: {0}")]
    NotARecipePage(String),

    /// The URL is not on any supported site
    #[error("The provided URL is not from the BBC Food website: {0}")]
    UnsupportedSite(String),

    /// The page has no JSON-LD block describing a recipe
    #[error("No recipe structured data found on the page")]
    MissingStructuredData,

    /// The JSON-LD block could not be decoded
    #[error("Failed to decode structured data: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to serialize the output table
    #[error("Failed to write output: {0}")]
    Write(#[from] csv::Error),

    /// Failed to create or flush the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ImportError {
    /// True for both flavours of source URL rejection.
    pub fn is_invalid_source(&self) -> bool {
        matches!(
            self,
            ImportError::NotARecipePage(_) | ImportError::UnsupportedSite(_)
        )
    }
}

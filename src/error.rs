use thiserror::Error;

/// Errors that can occur in the I/O layers around the matching engine.
///
/// The matching functions themselves never fail: unparseable candidate data is
/// demoted during selection, and an empty result is a regular `None` outcome.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Failed to fetch a search-results page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Failed to parse listings out of a page
    #[error("Failed to parse listings: {0}")]
    ScrapeError(String),

    /// LLM ingredient extraction failed
    #[error("Ingredient extraction failed: {0}")]
    ExtractionError(String),

    /// Quantity unit outside the supported set
    #[error("Unsupported quantity unit: {0}")]
    InvalidUnit(String),

    /// Ingredient amount that does not encode a number
    #[error("Amount is not a number: {0}")]
    InvalidAmount(String),

    /// Unknown ranking mode
    #[error("Unknown ranking mode: {0}")]
    InvalidMode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

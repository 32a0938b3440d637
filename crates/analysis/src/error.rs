//! Analysis error types.

use thiserror::Error;

/// Errors from the content analysis pipeline.
///
/// Unlike quote fetching these are surfaced to the caller: a malformed or
/// unavailable upstream analysis is a distinct failure, not something to
/// paper over with synthetic data.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No API key configured for the completion service.
    #[error("Missing API key for the completion service")]
    MissingApiKey,

    /// The completion service rejected or failed the request.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The completion reply was not the JSON object we asked for.
    #[error("Failed to parse completion reply: {0}")]
    MalformedReply(String),
}

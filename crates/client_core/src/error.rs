pub use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the one-shot roster fetch. An empty employee list is not
/// an error; it decodes fine and yields an empty roster.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("employee request failed: {source}")]
    Request { source: reqwest::Error },
    #[error("employee endpoint returned HTTP {status}")]
    Status { status: StatusCode },
    #[error("employee response body was not the expected shape: {source}")]
    Decode { source: reqwest::Error },
}

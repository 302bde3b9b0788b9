use thiserror::Error;

/// Failure of an API call, in the shape the screens care about.
///
/// `Unauthorized` sends the user back to the login screen; everything else
/// becomes a toast while the screen keeps its last good data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    /// The server processed the request and reported a business failure,
    /// either via a non-2xx status or a `success:false` envelope.
    #[error("{0}")]
    Server(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("your session has expired, please sign in again")]
    Unauthorized,

    #[error("not found")]
    NotFound,
}

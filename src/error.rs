use reqwest::StatusCode;
use thiserror::Error as ThisError;

/// All errors the library can surface to a caller.
///
/// Errors are never retried or downgraded internally; every failure is
/// terminal for that call and handled by the caller.
#[derive(Debug, ThisError)]
pub enum Error {
    /// `max_limit` was outside the accepted `1..=500` range.
    ///
    /// Raised locally, before any request is sent.
    #[error("max_limit must be between 1 and 500, got {0}")]
    InvalidMaxLimit(u32),

    /// The service rejected the API key (HTTP 401).
    #[error("invalid API key")]
    Authentication,

    /// The account balance cannot cover the request (HTTP 402).
    #[error("insufficient balance to process request")]
    InsufficientBalance,

    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// Too many requests in a short window (HTTP 429).
    #[error("rate limit exceeded")]
    RateLimit,

    /// The service failed internally (HTTP 500 and above).
    #[error("server error occurred")]
    Server,

    /// Any other non-success status from a search call.
    #[error("API error: {status} - {body}")]
    Api {
        /// The HTTP status code the service answered with.
        status: StatusCode,
        /// The raw response body text.
        body: String,
    },

    /// The status endpoint answered with a non-success code.
    ///
    /// Unlike [`search`], status checks do not classify the code further.
    ///
    /// [`search`]: crate::Client::search
    #[error("status check failed: {0}")]
    StatusCheck(StatusCode),

    /// The request could not be completed at the transport level.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A response body or record could not be decoded.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Maps a non-success status code from a search call to its error.
    ///
    /// This table is the single source of truth for status classification.
    /// `body` is the raw response text; it is only kept for codes without a
    /// dedicated variant.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Error {
        match status {
            StatusCode::UNAUTHORIZED => Error::Authentication,
            StatusCode::PAYMENT_REQUIRED => Error::InsufficientBalance,
            StatusCode::NOT_FOUND => Error::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
            status if status.is_server_error() => Error::Server,
            status => Error::Api { status, body },
        }
    }
}

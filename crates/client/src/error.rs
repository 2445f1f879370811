use {dispatch_channels::InvalidChannel, thiserror::Error};

/// Crate-wide result type for delivery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Terminal errors surfaced by [`Client::send_message`](crate::Client::send_message).
#[derive(Debug, Error)]
pub enum Error {
    /// Channel name is not in the registry. No request is made and nothing
    /// is retried.
    #[error(transparent)]
    InvalidChannel(#[from] InvalidChannel),

    /// Request body could not be encoded. Encoding is deterministic, so a
    /// replay would fail the same way; never retried.
    #[error("failed to encode request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Every attempt failed; wraps the error from the last one.
    #[error("failed to send message after {attempts} attempts")]
    RetriesExhausted {
        /// Total attempts made, including the initial one.
        attempts: usize,
        #[source]
        source: AttemptError,
    },
}

/// Failure of a single delivery attempt.
///
/// Every variant here is retry-eligible by construction: terminal conditions
/// belong on [`Error`] instead, so a new kind of failure cannot silently
/// enter the retry loop.
#[derive(Debug, Error)]
pub enum AttemptError {
    /// Connection failure or per-attempt timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-OK status with a server-reported error message in the body.
    #[error("server returned error: {message}")]
    Server { status: u16, message: String },

    /// Non-OK status whose body carried no readable error message.
    #[error("server returned status {status}")]
    Status { status: u16 },
}

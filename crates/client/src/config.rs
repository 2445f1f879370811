use {
    secrecy::Secret,
    std::{fmt, time::Duration},
};

/// Per-attempt request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retries after the initial attempt when none are configured.
pub const DEFAULT_RETRIES: usize = 3;

/// [`DEFAULT_RETRY_DELAY`] in milliseconds, for flag surfaces that take the
/// delay as an integer.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Pause between consecutive attempts when none is configured.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(DEFAULT_RETRY_DELAY_MS);

/// Construction-time configuration for a [`Client`](crate::Client).
///
/// Immutable once the client is built; reconfiguring means building a new
/// client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the notification server, without the `/send` path.
    pub server_url: String,

    /// Value of the `X-API-Key` header sent with every attempt.
    pub api_key: Secret<String>,

    /// Timeout for one attempt. Scoped to the individual request, not the
    /// whole retry loop.
    pub timeout: Duration,

    /// Retries after the initial attempt; total attempts are `retries + 1`.
    pub retries: usize,

    /// Fixed pause between consecutive attempts. Never applied before the
    /// first attempt or after the last.
    pub retry_delay: Duration,
}

impl ClientConfig {
    /// Configuration with default timeout and retry settings.
    #[must_use]
    pub fn new(server_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_key: Secret::new(api_key.into()),
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server_url", &self.server_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

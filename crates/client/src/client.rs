use {
    dispatch_channels::Channel,
    reqwest::{StatusCode, header},
    secrecy::ExposeSecret,
    tracing::{debug, info, warn},
};

use crate::{
    config::ClientConfig,
    error::{AttemptError, Error, Result},
    wire::{MessageRequest, MessageResponse},
};

/// Client for the dispatch notification server.
///
/// Cheap to clone; clones share the underlying connection pool, and
/// concurrent sends are independent of each other (each call runs its own
/// retry loop, with no ordering across calls).
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Client with default timeout and retry settings.
    #[must_use]
    pub fn new(server_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::builder(server_url, api_key).build()
    }

    /// Start building a client with non-default settings.
    #[must_use]
    pub fn builder(server_url: impl Into<String>, api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(server_url, api_key)
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send `message` to a channel identified by its wire name.
    ///
    /// The name is validated against the registry before anything else; an
    /// unknown name fails immediately without network I/O.
    pub async fn send_to_named(&self, name: &str, message: &str) -> Result<()> {
        let channel = name.parse::<Channel>()?;
        self.send_message(channel, message).await
    }

    /// Send `message` to `channel`, retrying failed attempts.
    ///
    /// Makes up to `retries + 1` sequential attempts, pausing `retry_delay`
    /// between consecutive ones. The calling task is occupied for the whole
    /// loop, pauses included; the configured timeout covers one attempt, not
    /// the loop. On success any response body is ignored.
    pub async fn send_message(&self, channel: Channel, message: &str) -> Result<()> {
        let body = serde_json::to_vec(&MessageRequest { channel, message })?;

        let max_attempts = self.config.retries + 1;
        let mut attempt = 1usize;

        loop {
            debug!(channel = %channel, attempt, max_attempts, "posting message");
            match self.post_send(&body).await {
                Ok(()) => {
                    info!(channel = %channel, attempt, "message delivered");
                    return Ok(());
                },
                Err(err) if attempt >= max_attempts => {
                    warn!(
                        channel = %channel,
                        attempts = max_attempts,
                        error = %err,
                        "message delivery failed, giving up"
                    );
                    return Err(Error::RetriesExhausted {
                        attempts: max_attempts,
                        source: err,
                    });
                },
                Err(err) => {
                    warn!(
                        channel = %channel,
                        attempt,
                        max_attempts,
                        retry_delay = ?self.config.retry_delay,
                        error = %err,
                        "send attempt failed, retrying"
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                    attempt += 1;
                },
            }
        }
    }

    /// One `POST /send` round trip.
    async fn post_send(&self, body: &[u8]) -> std::result::Result<(), AttemptError> {
        let url = format!("{}/send", self.config.server_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-API-Key", self.config.api_key.expose_secret())
            .body(body.to_vec())
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        // Best effort: the server reports failures as {"error": "..."}. An
        // unreadable body falls back to the raw status code.
        match response.json::<MessageResponse>().await {
            Ok(MessageResponse {
                error: Some(message),
                ..
            }) => Err(AttemptError::Server {
                status: status.as_u16(),
                message,
            }),
            _ => Err(AttemptError::Status {
                status: status.as_u16(),
            }),
        }
    }
}

/// Builder for [`Client`]. Every setting is fixed at `build()`; there is no
/// post-construction mutation API.
pub struct ClientBuilder {
    config: ClientConfig,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new(server_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(server_url, api_key),
            http: None,
        }
    }

    /// Timeout for one attempt (default 10s).
    #[must_use]
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Retries after the initial attempt (default 3).
    #[must_use]
    pub fn retries(mut self, retries: usize) -> Self {
        self.config.retries = retries;
        self
    }

    /// Pause between consecutive attempts (default 1s).
    #[must_use]
    pub fn retry_delay(mut self, delay: std::time::Duration) -> Self {
        self.config.retry_delay = delay;
        self
    }

    /// Use a pre-built `reqwest::Client` instead of the default pool.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    #[must_use]
    pub fn build(self) -> Client {
        Client {
            config: self.config,
            http: self.http.unwrap_or_default(),
        }
    }
}

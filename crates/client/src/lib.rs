//! HTTP client for the dispatch notification service.
//!
//! Posts short text messages to named channels on a remote server, applying
//! a per-attempt timeout and a bounded fixed-delay retry loop. Channel names
//! are validated against the closed registry in `dispatch-channels` before
//! any network I/O happens.

pub mod client;
pub mod config;
pub mod error;
pub mod wire;

pub use {
    client::{Client, ClientBuilder},
    config::ClientConfig,
    error::{AttemptError, Error, Result},
};

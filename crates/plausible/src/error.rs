//! Error types for the Plausible SDK.

/// Errors that can occur when using the Plausible SDK.
///
/// Only [`Error::InvalidServer`], [`Error::InvalidDomain`] and
/// [`Error::EventIsPageview`] are ever returned to callers of the tracking
/// API. The remaining variants describe failures of background deliveries
/// and are reported through `tracing`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server is not an absolute `http`/`https` URL.
    #[error("Invalid server: expected an absolute http or https URL")]
    InvalidServer,

    /// Domain is not an absolute `http`/`https`/`app` URL with a host.
    #[error("Invalid domain: expected an absolute http, https or app URL with a host")]
    InvalidDomain,

    /// A custom event was named `pageview`.
    #[error("Custom events cannot be named \"pageview\", use track_pageview instead")]
    EventIsPageview,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! HTTP transport for sending events.

use crate::config::Config;
use crate::Error;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use tracing::debug;

/// HTTP transport for sending events to the Plausible events API.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.event_endpoint(),
        })
    }

    /// Post one serialized event. The response body is only read on failure.
    pub(crate) async fn send(&self, body: Vec<u8>) -> Result<(), Error> {
        debug!(endpoint = %self.endpoint, bytes = body.len(), "sending event");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = %status, "event sent");
        Ok(())
    }
}

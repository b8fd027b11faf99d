//! Plausible client implementation.

use crate::builders::EventBuilder;
use crate::config::{Config, PlausibleBuilder};
use crate::types::{Properties, PAGEVIEW_EVENT};
use crate::urls::page_url;
use crate::{Error, HttpTransport};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug_span, error, warn, Instrument};

/// Plausible analytics client.
///
/// Tracking is fire-and-forget: every call spawns one request on the current
/// tokio runtime and returns immediately. Delivery failures are logged with
/// `tracing` and never returned to the caller.
///
/// The client is cheap to clone and can be shared between tasks.
///
/// # Example
///
/// ```rust,no_run
/// use plausible::Plausible;
///
/// #[tokio::main]
/// async fn main() -> Result<(), plausible::Error> {
///     let client = Plausible::new("app://com.example.myapp")?;
///
///     client.track_pageview("/settings", None);
///
///     client
///         .event("export", "/reports")?
///         .property("format", "csv")
///         .send();
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Plausible {
    config: Arc<Config>,
    transport: Arc<HttpTransport>,
}

impl Plausible {
    /// Create a new builder for the given site domain.
    pub fn builder(domain: impl Into<String>) -> PlausibleBuilder {
        PlausibleBuilder::new(domain)
    }

    /// Create a client reporting to the hosted Plausible service.
    ///
    /// `domain` must be a fully qualified URL for a site set up in
    /// Plausible, such as `https://example.org` or `app://com.example.myapp`.
    pub fn new(domain: impl Into<String>) -> Result<Self, Error> {
        PlausibleBuilder::new(domain).build()
    }

    /// Create a client reporting to a self-hosted Plausible server.
    pub fn with_server(server: impl Into<String>, domain: impl Into<String>) -> Result<Self, Error> {
        PlausibleBuilder::new(domain).server(server).build()
    }

    /// Create a new client from config.
    pub(crate) fn from_config(config: Config) -> Result<Self, Error> {
        let transport = Arc::new(HttpTransport::new(&config)?);

        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The page URL reported for an event at `path`.
    pub fn pageview_url(&self, path: &str) -> String {
        page_url(self.config.domain(), path)
    }

    // ============================================
    // TRACK
    // ============================================

    /// Send a pageview for `path`.
    ///
    /// There doesn't have to be anything served at the resulting URL.
    /// `None` and an empty map both send the event without properties.
    pub fn track_pageview(&self, path: impl Into<String>, properties: Option<Properties>) {
        self.dispatch(EventBuilder::pageview(path).properties(properties.unwrap_or_default()));
    }

    /// Send a custom event named `event_name` for `path`.
    ///
    /// Fails with [`Error::EventIsPageview`] without sending anything when
    /// `event_name` is `"pageview"`; use [`Plausible::track_pageview`].
    pub fn track_event(
        &self,
        event_name: impl Into<String>,
        path: impl Into<String>,
        properties: Option<Properties>,
    ) -> Result<(), Error> {
        self.event(event_name, path)?
            .properties(properties.unwrap_or_default())
            .send();
        Ok(())
    }

    /// Start a pageview for `path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use plausible::Plausible;
    /// # fn example(client: &Plausible) {
    /// client.pageview("/pricing")
    ///     .property("plan", "pro")
    ///     .send();
    /// # }
    /// ```
    pub fn pageview(&self, path: impl Into<String>) -> SendableEvent<'_> {
        SendableEvent {
            builder: EventBuilder::pageview(path),
            client: self,
        }
    }

    /// Start a custom event named `event_name` for `path`.
    pub fn event(
        &self,
        event_name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<SendableEvent<'_>, Error> {
        let event_name = event_name.into();
        if event_name == PAGEVIEW_EVENT {
            return Err(Error::EventIsPageview);
        }

        Ok(SendableEvent {
            builder: EventBuilder::new(event_name, path),
            client: self,
        })
    }

    // ============================================
    // INTERNAL
    // ============================================

    fn dispatch(&self, builder: EventBuilder) {
        let payload = builder.build(&self.config);

        let body = match serde_json::to_vec(&payload) {
            Ok(body) => body,
            Err(e) => {
                let err = Error::from(e);
                error!(error = %err, event = %payload.name, "dropping event");
                return;
            }
        };

        let Ok(runtime) = Handle::try_current() else {
            warn!(event = %payload.name, "no tokio runtime, dropping event");
            return;
        };

        let transport = self.transport.clone();
        let span = debug_span!("plausible_event", event = %payload.name, url = %payload.url);

        // Detached: the handle is dropped and the caller never waits.
        runtime.spawn(
            async move {
                match transport.send(body).await {
                    Ok(()) => {}
                    Err(Error::Api { status, body }) => {
                        warn!(status, body = %body, "Plausible rejected event");
                    }
                    Err(e) => {
                        error!(error = %e, "error sending event to Plausible");
                    }
                }
            }
            .instrument(span),
        );
    }
}

impl PlausibleBuilder {
    /// Build the Plausible client.
    pub fn build(self) -> Result<Plausible, Error> {
        let config = self.build_config()?;
        Plausible::from_config(config)
    }
}

// ============================================
// SENDABLE WRAPPER
// ============================================

/// Sendable event builder.
pub struct SendableEvent<'a> {
    builder: EventBuilder,
    client: &'a Plausible,
}

impl<'a> SendableEvent<'a> {
    /// Add a property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.property(key, value);
        self
    }

    /// Add several properties.
    pub fn properties<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.builder = self.builder.properties(properties);
        self
    }

    /// Send the event without waiting for the response.
    pub fn send(self) {
        self.client.dispatch(self.builder);
    }
}

//! Client configuration.

use crate::Error;
use std::time::Duration;
use url::Url;

/// Default Plausible server (the hosted service).
pub const DEFAULT_SERVER: &str = "https://plausible.io";

/// Path of the events API under the server URL.
pub const EVENT_ENDPOINT_PATH: &str = "/api/event";

/// Default `User-Agent` sent with every event.
pub const DEFAULT_USER_AGENT: &str = concat!("plausible-rs/", env!("CARGO_PKG_VERSION"));

const SERVER_SCHEMES: &[&str] = &["http", "https"];
const DOMAIN_SCHEMES: &[&str] = &["http", "https", "app"];

/// Validated, immutable client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) server: Url,
    pub(crate) domain: Url,
    pub(crate) domain_host: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Option<Duration>,
}

impl Config {
    /// Get the Plausible server URL.
    pub fn server(&self) -> &Url {
        &self.server
    }

    /// Get the site domain URL, e.g. `app://com.example.myapp`.
    pub fn domain(&self) -> &Url {
        &self.domain
    }

    /// Get the host of the site domain. This is what Plausible receives as
    /// the `domain` field.
    pub fn domain_host(&self) -> &str {
        &self.domain_host
    }

    /// Get the `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Get the request timeout, if one was configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Get the events API endpoint.
    pub fn event_endpoint(&self) -> String {
        crate::urls::join_path(&self.server, EVENT_ENDPOINT_PATH)
    }
}

/// Builder for the Plausible client.
#[derive(Debug)]
pub struct PlausibleBuilder {
    domain: String,
    server: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl PlausibleBuilder {
    /// Create a new builder for the given site domain.
    ///
    /// The domain must include its scheme (`https://`, `http://` or
    /// `app://`), such as `app://com.example.myapp`.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            server: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the Plausible server. Defaults to [`DEFAULT_SERVER`].
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Set the `User-Agent` header. Defaults to [`DEFAULT_USER_AGENT`].
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a request timeout. Without one the HTTP client's default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the configuration.
    pub(crate) fn build_config(self) -> Result<Config, Error> {
        let server = parse_server(self.server.as_deref().unwrap_or(DEFAULT_SERVER))?;
        let (domain, domain_host) = parse_domain(&self.domain)?;

        Ok(Config {
            server,
            domain,
            domain_host,
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
            timeout: self.timeout,
        })
    }
}

fn parse_server(server: &str) -> Result<Url, Error> {
    let url = Url::parse(server).map_err(|_| Error::InvalidServer)?;
    if !SERVER_SCHEMES.contains(&url.scheme()) {
        return Err(Error::InvalidServer);
    }
    Ok(url)
}

fn parse_domain(domain: &str) -> Result<(Url, String), Error> {
    let url = Url::parse(domain).map_err(|_| Error::InvalidDomain)?;
    if !DOMAIN_SCHEMES.contains(&url.scheme()) {
        return Err(Error::InvalidDomain);
    }
    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_owned(),
        _ => return Err(Error::InvalidDomain),
    };
    Ok((url, host))
}

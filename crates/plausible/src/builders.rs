//! Event builder for fluent API.

use crate::config::Config;
use crate::types::{EventPayload, Properties, PAGEVIEW_EVENT};
use crate::urls::page_url;

/// Builder for a single event.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    name: String,
    path: String,
    properties: Properties,
}

impl EventBuilder {
    pub(crate) fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            properties: Properties::new(),
        }
    }

    pub(crate) fn pageview(path: impl Into<String>) -> Self {
        Self::new(PAGEVIEW_EVENT, path)
    }

    /// Add a property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Add several properties.
    pub fn properties<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties
            .extend(properties.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Build the payload against the client configuration.
    pub(crate) fn build(self, config: &Config) -> EventPayload {
        EventPayload {
            url: page_url(config.domain(), &self.path),
            name: self.name,
            domain: config.domain_host().to_owned(),
            props: self.properties,
        }
    }
}

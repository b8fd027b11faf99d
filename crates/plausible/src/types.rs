//! Event types and serialization.

use serde::Serialize;
use std::collections::HashMap;

/// Name Plausible reserves for pageview events.
pub const PAGEVIEW_EVENT: &str = "pageview";

/// Custom properties attached to an event.
pub type Properties = HashMap<String, String>;

/// Body of a `POST /api/event` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPayload {
    pub name: String,
    pub url: String,
    pub domain: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub props: Properties,
}

//! Plausible Analytics events API client for Rust.
//!
//! Sends pageviews and custom events to a Plausible server
//! (<https://plausible.io/docs/events-api>). Tracking never blocks and never
//! fails because of the network: each event is posted from a detached tokio
//! task and delivery errors are reported through `tracing`.
//!
//! # Example
//!
//! ```rust,ignore
//! use plausible::Plausible;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), plausible::Error> {
//!     let client = Plausible::builder("app://com.example.myapp")
//!         .server("https://plausible.example.com")
//!         .build()?;
//!
//!     client.track_pageview("/settings", None);
//!
//!     let props = HashMap::from([("plan".to_string(), "pro".to_string())]);
//!     client.track_event("upgrade", "/billing", Some(props))?;
//!     Ok(())
//! }
//! ```

mod builders;
mod client;
mod config;
mod error;
mod transport;
mod types;
mod urls;

pub(crate) use transport::HttpTransport;

pub use client::{Plausible, SendableEvent};
pub use config::{
    Config, PlausibleBuilder, DEFAULT_SERVER, DEFAULT_USER_AGENT, EVENT_ENDPOINT_PATH,
};
pub use error::Error;
pub use types::{EventPayload, Properties, PAGEVIEW_EVENT};

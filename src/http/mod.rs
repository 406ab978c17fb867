//! HTTP transport
//!
//! Authenticated request issuing, base-URL composition and response decoding.
//! Retry and backoff are deliberately out of scope; every call is a single
//! round trip whose outcome is reported verbatim to the caller.

mod client;

pub use client::{Client, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};

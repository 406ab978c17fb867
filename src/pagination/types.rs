//! Pagination types
//!
//! Defines the page envelope decoded from collection responses and the
//! cursor state driving the iterator.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record kind that can be listed page by page.
///
/// The page envelope keys its resource array by kind
/// (`{"meta": {...}, "sims": [...]}`), so each record type names the key it
/// lives under.
pub trait Pageable: DeserializeOwned {
    /// JSON key of the resource array in the page envelope.
    const ARRAY_KEY: &'static str;
}

/// The `meta` block of a page envelope.
///
/// `page_size` is always populated on a well-formed page; a response without
/// it is rejected as malformed. An empty or absent `next_page_url` is the
/// sole termination signal, there is no total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// URL of the first page of the collection
    pub first_page_url: String,
    /// Name of the resource array key in the envelope
    pub key: String,
    /// Continuation URL, absent or empty on the terminal page
    #[serde(default)]
    pub next_page_url: Option<String>,
    /// Zero-based page number
    #[serde(default)]
    pub page: u32,
    /// Declared window size
    pub page_size: u32,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous_page_url: Option<String>,
    /// URL of this page
    pub url: String,
}

impl PageMeta {
    /// The continuation URL, treating an empty string the same as absent.
    pub fn next_url(&self) -> Option<&str> {
        self.next_page_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// One fetched window of a collection: metadata plus typed records in server
/// order. Immutable once returned; the iterator never touches it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Pagination metadata
    pub meta: PageMeta,
    /// Decoded records, order as served
    pub records: Vec<T>,
}

impl<T: Pageable> Page<T> {
    /// Decode a page envelope.
    ///
    /// Fails with a decode error when the envelope is not an object, the
    /// `meta` block is missing or malformed, or the resource array is absent
    /// or contains a record that does not match the schema.
    pub fn from_value(body: Value) -> Result<Self> {
        let Value::Object(mut envelope) = body else {
            return Err(Error::decode("page envelope is not a JSON object"));
        };

        let meta = envelope
            .remove("meta")
            .ok_or_else(|| Error::decode("page envelope is missing 'meta'"))?;
        let meta: PageMeta = serde_json::from_value(meta)
            .map_err(|e| Error::decode(format!("malformed page meta: {e}")))?;

        let records = envelope.remove(T::ARRAY_KEY).ok_or_else(|| {
            Error::decode(format!(
                "page envelope is missing resource array '{}'",
                T::ARRAY_KEY
            ))
        })?;
        let Value::Array(records) = records else {
            return Err(Error::decode(format!(
                "'{}' is not a JSON array",
                T::ARRAY_KEY
            )));
        };

        let records = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                serde_json::from_value(record).map_err(|e| {
                    Error::decode(format!("record {i} in '{}': {e}", T::ARRAY_KEY))
                })
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Self { meta, records })
    }
}

impl<T> Page<T> {
    /// Number of records in this window
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when this window holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when this is the last window of the collection
    pub fn is_terminal(&self) -> bool {
        self.meta.next_url().is_none()
    }
}

/// Position of a traversal within a collection.
///
/// Decided once per successful fetch from the decoded metadata, so callers
/// never inspect URL strings for emptiness themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// No fetch issued yet; the first request is synthesized from the
    /// collection path and the caller's filters.
    Start,
    /// The collection has more windows at this verbatim continuation URL.
    HasMore(String),
    /// A terminal page was returned; further fetches are refused.
    Exhausted,
}

impl Cursor {
    /// True before the first fetch
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    /// True while a continuation URL is held
    pub fn has_more(&self) -> bool {
        matches!(self, Self::HasMore(_))
    }

    /// True once a terminal page was seen
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

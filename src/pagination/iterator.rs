//! Generic page iterator
//!
//! One iterator instance per logical traversal. The cursor is owned, mutated
//! only on a successful fetch, and never shared: concurrent traversals each
//! construct their own iterator.

use super::types::{Cursor, Page, Pageable};
use crate::error::{Error, Result};
use crate::http::Client;
use crate::params::Params;
use futures::stream::{self, Stream, TryStreamExt};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::debug;

/// Cursor over one paginated collection endpoint.
///
/// The caller-supplied filters decorate only the very first request; every
/// subsequent fetch follows the server's continuation URL verbatim, which
/// already embeds them. A failed fetch leaves the cursor untouched, so the
/// same call can be retried without skipping or repeating a window. Once a
/// terminal page has been returned, further calls yield
/// [`Error::NoMorePages`].
pub struct PageIterator<'a, T: Pageable> {
    client: &'a Client,
    path: String,
    filters: Params,
    cursor: Cursor,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T: Pageable> PageIterator<'a, T> {
    pub(crate) fn new(client: &'a Client, path: impl Into<String>, filters: Params) -> Self {
        Self {
            client,
            path: path.into(),
            filters,
            cursor: Cursor::Start,
            _record: PhantomData,
        }
    }

    /// The traversal's current position.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Fetch the next window of the collection.
    pub async fn next_page(&mut self) -> Result<Page<T>> {
        let body: Value = match &self.cursor {
            Cursor::Start => self.client.get_json(&self.path, &self.filters).await?,
            Cursor::HasMore(url) => self.client.get_url_json(url).await?,
            Cursor::Exhausted => return Err(Error::NoMorePages),
        };

        let page = Page::from_value(body)?;
        self.cursor = match page.meta.next_url() {
            Some(url) => Cursor::HasMore(url.to_string()),
            None => Cursor::Exhausted,
        };
        debug!(
            records = page.len(),
            terminal = page.is_terminal(),
            "fetched page of '{}'",
            T::ARRAY_KEY
        );
        Ok(page)
    }

    /// Flatten the remaining pages into a stream of records.
    ///
    /// The stream ends cleanly at the terminal page; a transport or decode
    /// failure is yielded once and terminates the stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
    {
        stream::try_unfold(self, |mut iter| async move {
            if iter.cursor.is_exhausted() {
                return Ok::<_, Error>(None);
            }
            let page = iter.next_page().await?;
            let records = stream::iter(page.records.into_iter().map(Ok::<T, Error>));
            Ok(Some((records, iter)))
        })
        .try_flatten()
    }
}

impl<T: Pageable> std::fmt::Debug for PageIterator<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageIterator")
            .field("path", &self.path)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

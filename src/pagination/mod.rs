//! Pagination engine
//!
//! The API serves every collection in fixed-size windows described by a
//! `meta` block carrying a continuation URL. This module exposes one generic
//! cursor, [`PageIterator`], reused by every resource kind: construct it with
//! the collection path and filters, then call `next_page` until the cursor is
//! exhausted. Typed resource services are thin configuration on top of it.

mod iterator;
mod types;

pub use iterator::PageIterator;
pub use types::{Cursor, Page, PageMeta, Pageable};

#[cfg(test)]
mod tests;

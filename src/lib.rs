//! # Super SIM client
//!
//! A typed async client for a cloud IoT SIM-management REST API: SIM
//! provisioning, fleets, network access profiles, usage reporting and device
//! commands.
//!
//! Every collection endpoint is exposed through one generic pagination
//! engine ([`pagination::PageIterator`]); the per-resource services are thin
//! typed configuration over it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use supersim_client::{Client, Params, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("ACxxxx", "auth-token")?;
//!
//!     // One page of active SIMs
//!     let page = client.sims().page(Params::new().set("Status", "active")).await?;
//!     for sim in &page.records {
//!         println!("{} {}", sim.sid, sim.iccid);
//!     }
//!
//!     // Or walk the whole collection
//!     let mut iter = client.sims().iter(Params::new());
//!     while !iter.cursor().is_exhausted() {
//!         let page = iter.next_page().await?;
//!         // process page.records
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)] // TODO: finish field-level docs on the record structs

/// Error types for the client
pub mod error;

/// Authenticated HTTP transport
pub mod http;

/// Generic pagination engine
pub mod pagination;

/// Query filters and form parameters
pub mod params;

/// Typed resource services
pub mod resources;

pub use error::{Error, Result};
pub use http::{Client, ClientConfig};
pub use pagination::{Cursor, Page, PageIterator, PageMeta, Pageable};
pub use params::Params;
pub use resources::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

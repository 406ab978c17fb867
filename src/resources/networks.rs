//! Network resources
//!
//! Read-only catalog of the cellular networks SIMs can attach to.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::Client;
use crate::pagination::{Page, PageIterator, Pageable};
use crate::params::Params;

const NETWORKS_PATH: &str = "Networks";

/// MCC/MNC pair identifying a network operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkIdentifier {
    pub mcc: String,
    pub mnc: String,
}

/// A cellular network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub sid: String,
    pub friendly_name: String,
    /// Alpha-2 ISO country code
    pub iso_country: String,
    #[serde(default)]
    pub identifiers: Vec<NetworkIdentifier>,
    pub url: String,
}

impl Pageable for Network {
    const ARRAY_KEY: &'static str = "networks";
}

/// API operations on the network catalog
#[derive(Debug)]
pub struct NetworkService<'a> {
    client: &'a Client,
}

impl<'a> NetworkService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch a single network by sid.
    pub async fn get(&self, sid: &str) -> Result<Network> {
        self.client.get_resource(NETWORKS_PATH, sid).await
    }

    /// Fetch one page of networks matching the filters
    /// (`IsoCountry`, `Mcc`, `Mnc`).
    pub async fn page(&self, filters: Params) -> Result<Page<Network>> {
        self.iter(filters).next_page().await
    }

    /// Iterator over all networks matching the filters.
    pub fn iter(&self, filters: Params) -> PageIterator<'a, Network> {
        PageIterator::new(self.client, NETWORKS_PATH, filters)
    }
}

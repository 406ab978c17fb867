//! Fleet resources
//!
//! A fleet groups SIMs under shared connectivity settings: data limits,
//! SMS command routing and the network access profile in force.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::Client;
use crate::pagination::{Page, PageIterator, Pageable};
use crate::params::Params;

const FLEETS_PATH: &str = "Fleets";

/// A fleet of SIMs with shared configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub sid: String,
    pub account_sid: String,
    #[serde(default)]
    pub unique_name: Option<String>,
    /// Whether SIMs in this fleet may use data
    pub data_enabled: bool,
    /// Rolling data allowance per SIM, in megabytes
    pub data_limit: u32,
    pub data_metering: String,
    /// Whether SIMs in this fleet may send and receive SMS commands
    pub sms_commands_enabled: bool,
    /// Webhook invoked for mobile-originated SMS commands
    #[serde(default)]
    pub sms_commands_url: Option<String>,
    #[serde(default)]
    pub sms_commands_method: Option<String>,
    /// Network access profile controlling which networks SIMs may attach to
    #[serde(default)]
    pub network_access_profile_sid: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub url: String,
}

impl Pageable for Fleet {
    const ARRAY_KEY: &'static str = "fleets";
}

/// API operations on fleet resources
#[derive(Debug)]
pub struct FleetService<'a> {
    client: &'a Client,
}

impl<'a> FleetService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a fleet from the given form parameters.
    pub async fn create(&self, params: &Params) -> Result<Fleet> {
        self.client.create_resource(FLEETS_PATH, params).await
    }

    /// Fetch a single fleet by sid or unique name.
    pub async fn get(&self, sid_or_unique_name: &str) -> Result<Fleet> {
        self.client
            .get_resource(FLEETS_PATH, sid_or_unique_name)
            .await
    }

    /// Update a fleet's configuration.
    pub async fn update(&self, sid: &str, params: &Params) -> Result<Fleet> {
        self.client.update_resource(FLEETS_PATH, sid, params).await
    }

    /// Fetch one page of fleets matching the filters.
    pub async fn page(&self, filters: Params) -> Result<Page<Fleet>> {
        self.iter(filters).next_page().await
    }

    /// Iterator over all fleets matching the filters.
    pub fn iter(&self, filters: Params) -> PageIterator<'a, Fleet> {
        PageIterator::new(self.client, FLEETS_PATH, filters)
    }
}

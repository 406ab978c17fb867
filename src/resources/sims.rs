//! SIM resources
//!
//! Registration, lifecycle updates and listing of the account's SIMs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::Client;
use crate::pagination::{Page, PageIterator, Pageable};
use crate::params::Params;

const SIMS_PATH: &str = "Sims";

/// Lifecycle state of a SIM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimStatus {
    /// Registered but never activated
    New,
    /// Deactivated, ready to be activated
    Ready,
    /// Able to connect and use data
    Active,
    /// Blocked from the network
    Inactive,
    /// A status transition has been requested but not yet applied
    Scheduled,
}

/// A provisioned SIM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sim {
    pub sid: String,
    #[serde(default)]
    pub unique_name: Option<String>,
    pub account_sid: String,
    pub iccid: String,
    pub status: SimStatus,
    /// Fleet this SIM belongs to, if assigned
    #[serde(default)]
    pub fleet_sid: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub url: String,
}

impl Pageable for Sim {
    const ARRAY_KEY: &'static str = "sims";
}

/// API operations on SIM resources
#[derive(Debug)]
pub struct SimService<'a> {
    client: &'a Client,
}

impl<'a> SimService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Register a SIM to the account using its ICCID and registration code.
    pub async fn register(&self, iccid: &str, registration_code: &str) -> Result<Sim> {
        let params = Params::new()
            .set("Iccid", iccid)
            .set("RegistrationCode", registration_code);
        self.client.create_resource(SIMS_PATH, &params).await
    }

    /// Fetch a single SIM by sid or unique name.
    pub async fn get(&self, sid_or_unique_name: &str) -> Result<Sim> {
        self.client.get_resource(SIMS_PATH, sid_or_unique_name).await
    }

    /// Update a SIM: status changes, renaming, fleet assignment.
    ///
    /// The fields are form parameters (`Status`, `UniqueName`, `Fleet`, ...);
    /// the server rejects unknown ones.
    pub async fn update(&self, sid: &str, params: &Params) -> Result<Sim> {
        self.client.update_resource(SIMS_PATH, sid, params).await
    }

    /// Fetch one page of SIMs matching the filters.
    pub async fn page(&self, filters: Params) -> Result<Page<Sim>> {
        self.iter(filters).next_page().await
    }

    /// Iterator over all SIMs matching the filters.
    pub fn iter(&self, filters: Params) -> PageIterator<'a, Sim> {
        PageIterator::new(self.client, SIMS_PATH, filters)
    }
}

//! Usage record resources
//!
//! Aggregated data usage, grouped by SIM, fleet, network or country over a
//! reporting period. Listing is the only operation the endpoint offers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::Client;
use crate::pagination::{Page, PageIterator, Pageable};
use crate::params::Params;

const USAGE_RECORDS_PATH: &str = "UsageRecords";

/// Reporting window of a usage record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePeriod {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Aggregated data usage over one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub account_sid: String,
    /// Populated when grouping by SIM
    #[serde(default)]
    pub sim_sid: Option<String>,
    /// Populated when grouping by fleet
    #[serde(default)]
    pub fleet_sid: Option<String>,
    /// Populated when grouping by network
    #[serde(default)]
    pub network_sid: Option<String>,
    /// Populated when grouping by country
    #[serde(default)]
    pub iso_country: Option<String>,
    pub period: UsagePeriod,
    /// Bytes uploaded over the period
    pub data_upload: u64,
    /// Bytes downloaded over the period
    pub data_download: u64,
    pub data_total: u64,
}

impl Pageable for UsageRecord {
    const ARRAY_KEY: &'static str = "usage_records";
}

/// API operations on usage records
#[derive(Debug)]
pub struct UsageRecordService<'a> {
    client: &'a Client,
}

impl<'a> UsageRecordService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch one page of usage records matching the filters
    /// (`Sim`, `Fleet`, `Network`, `IsoCountry`, `Group`, `Granularity`,
    /// `StartTime`, `EndTime`).
    pub async fn page(&self, filters: Params) -> Result<Page<UsageRecord>> {
        self.iter(filters).next_page().await
    }

    /// Iterator over all usage records matching the filters.
    pub fn iter(&self, filters: Params) -> PageIterator<'a, UsageRecord> {
        PageIterator::new(self.client, USAGE_RECORDS_PATH, filters)
    }
}

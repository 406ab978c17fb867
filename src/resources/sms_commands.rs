//! SMS command resources
//!
//! SMS payloads exchanged with a SIM's device over the signaling channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::commands::Direction;
use crate::error::Result;
use crate::http::Client;
use crate::pagination::{Page, PageIterator, Pageable};
use crate::params::Params;

const SMS_COMMANDS_PATH: &str = "SmsCommands";

/// An SMS command sent to or received from a SIM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsCommand {
    pub sid: String,
    pub account_sid: String,
    pub sim_sid: String,
    /// Message body
    pub payload: String,
    /// Delivery state as reported by the network (`queued`, `sent`,
    /// `delivered`, `received`, `failed`)
    pub status: String,
    pub direction: Direction,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub url: String,
}

impl Pageable for SmsCommand {
    const ARRAY_KEY: &'static str = "sms_commands";
}

/// API operations on SMS command resources
#[derive(Debug)]
pub struct SmsCommandService<'a> {
    client: &'a Client,
}

impl<'a> SmsCommandService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Send an SMS command to a SIM, addressed by sid or unique name.
    pub async fn send(&self, sim: &str, payload: &str) -> Result<SmsCommand> {
        let params = Params::new().set("Sim", sim).set("Payload", payload);
        self.create(&params).await
    }

    /// Create an SMS command from raw form parameters.
    pub async fn create(&self, params: &Params) -> Result<SmsCommand> {
        self.client.create_resource(SMS_COMMANDS_PATH, params).await
    }

    /// Fetch a single SMS command by sid.
    pub async fn get(&self, sid: &str) -> Result<SmsCommand> {
        self.client.get_resource(SMS_COMMANDS_PATH, sid).await
    }

    /// Fetch one page of SMS commands matching the filters
    /// (`Sim`, `Status`, `Direction`).
    pub async fn page(&self, filters: Params) -> Result<Page<SmsCommand>> {
        self.iter(filters).next_page().await
    }

    /// Iterator over all SMS commands matching the filters.
    pub fn iter(&self, filters: Params) -> PageIterator<'a, SmsCommand> {
        PageIterator::new(self.client, SMS_COMMANDS_PATH, filters)
    }
}

//! Command resources
//!
//! Machine-to-machine messages exchanged with a SIM's device.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::Client;
use crate::pagination::{Page, PageIterator, Pageable};
use crate::params::Params;

const COMMANDS_PATH: &str = "Commands";

/// Direction of a command relative to the SIM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToSim,
    FromSim,
}

/// A command sent to or received from a SIM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub sid: String,
    pub account_sid: String,
    pub sim_sid: String,
    /// Message body
    pub command: String,
    #[serde(default)]
    pub command_mode: Option<String>,
    /// Delivery state as reported by the network (`queued`, `sent`,
    /// `delivered`, `received`, `failed`)
    pub status: String,
    pub direction: Direction,
    #[serde(default)]
    pub delivery_receipt_requested: Option<bool>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub url: String,
}

impl Pageable for Command {
    const ARRAY_KEY: &'static str = "commands";
}

/// API operations on command resources
#[derive(Debug)]
pub struct CommandService<'a> {
    client: &'a Client,
}

impl<'a> CommandService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Send a command to a SIM, addressed by sid or unique name.
    pub async fn send(&self, sim: &str, command: &str) -> Result<Command> {
        let params = Params::new().set("Sim", sim).set("Command", command);
        self.create(&params).await
    }

    /// Create a command from raw form parameters, for callers that need
    /// callback fields beyond `Sim` and `Command`.
    pub async fn create(&self, params: &Params) -> Result<Command> {
        self.client.create_resource(COMMANDS_PATH, params).await
    }

    /// Fetch a single command by sid.
    pub async fn get(&self, sid: &str) -> Result<Command> {
        self.client.get_resource(COMMANDS_PATH, sid).await
    }

    /// Fetch one page of commands matching the filters
    /// (`Sim`, `Status`, `Direction`).
    pub async fn page(&self, filters: Params) -> Result<Page<Command>> {
        self.iter(filters).next_page().await
    }

    /// Iterator over all commands matching the filters.
    pub fn iter(&self, filters: Params) -> PageIterator<'a, Command> {
        PageIterator::new(self.client, COMMANDS_PATH, filters)
    }
}

//! Network access profile resources
//!
//! A profile restricts which networks the SIMs of a fleet may attach to.
//! The attached networks live as a nested collection under
//! `NetworkAccessProfiles/{sid}/Networks`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::networks::NetworkIdentifier;
use crate::error::Result;
use crate::http::Client;
use crate::pagination::{Page, PageIterator, Pageable};
use crate::params::Params;

const NAP_PATH: &str = "NetworkAccessProfiles";

fn nap_networks_path(nap_sid: &str) -> String {
    format!("{NAP_PATH}/{nap_sid}/Networks")
}

/// A network access profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAccessProfile {
    pub sid: String,
    #[serde(default)]
    pub unique_name: Option<String>,
    pub account_sid: String,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub url: String,
    /// Links to nested collections, keyed by collection name
    #[serde(default)]
    pub links: HashMap<String, String>,
}

impl Pageable for NetworkAccessProfile {
    const ARRAY_KEY: &'static str = "network_access_profiles";
}

/// A network attached to a network access profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NapNetwork {
    pub sid: String,
    pub network_access_profile_sid: String,
    pub friendly_name: String,
    /// Alpha-2 ISO country code
    pub iso_country: String,
    #[serde(default)]
    pub identifiers: Vec<NetworkIdentifier>,
    pub url: String,
}

impl Pageable for NapNetwork {
    const ARRAY_KEY: &'static str = "networks";
}

/// API operations on network access profiles and their attachments
#[derive(Debug)]
pub struct NetworkAccessProfileService<'a> {
    client: &'a Client,
}

impl<'a> NetworkAccessProfileService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a profile from the given form parameters
    /// (`UniqueName`, repeated `Networks`).
    pub async fn create(&self, params: &Params) -> Result<NetworkAccessProfile> {
        self.client.create_resource(NAP_PATH, params).await
    }

    /// Fetch a single profile by sid or unique name.
    pub async fn get(&self, sid_or_unique_name: &str) -> Result<NetworkAccessProfile> {
        self.client.get_resource(NAP_PATH, sid_or_unique_name).await
    }

    /// Update a profile.
    pub async fn update(&self, sid: &str, params: &Params) -> Result<NetworkAccessProfile> {
        self.client.update_resource(NAP_PATH, sid, params).await
    }

    /// Fetch one page of profiles.
    pub async fn page(&self, filters: Params) -> Result<Page<NetworkAccessProfile>> {
        self.iter(filters).next_page().await
    }

    /// Iterator over all profiles.
    pub fn iter(&self, filters: Params) -> PageIterator<'a, NetworkAccessProfile> {
        PageIterator::new(self.client, NAP_PATH, filters)
    }

    // ============================================================================
    // Nested network attachments
    // ============================================================================

    /// Attach a network to a profile.
    pub async fn add_network(&self, nap_sid: &str, network_sid: &str) -> Result<NapNetwork> {
        let params = Params::new().set("Network", network_sid);
        self.client
            .create_resource(&nap_networks_path(nap_sid), &params)
            .await
    }

    /// Fetch a single attached network.
    pub async fn get_network(&self, nap_sid: &str, sid: &str) -> Result<NapNetwork> {
        self.client
            .get_resource(&nap_networks_path(nap_sid), sid)
            .await
    }

    /// Update a network attachment.
    pub async fn update_network(
        &self,
        nap_sid: &str,
        sid: &str,
        params: &Params,
    ) -> Result<NapNetwork> {
        self.client
            .update_resource(&nap_networks_path(nap_sid), sid, params)
            .await
    }

    /// Detach a network from a profile.
    pub async fn remove_network(&self, nap_sid: &str, sid: &str) -> Result<()> {
        self.client
            .delete_resource(&nap_networks_path(nap_sid), sid)
            .await
    }

    /// Fetch one page of the profile's attached networks.
    pub async fn network_page(&self, nap_sid: &str, filters: Params) -> Result<Page<NapNetwork>> {
        self.network_iter(nap_sid, filters).next_page().await
    }

    /// Iterator over all networks attached to a profile.
    pub fn network_iter(&self, nap_sid: &str, filters: Params) -> PageIterator<'a, NapNetwork> {
        PageIterator::new(self.client, nap_networks_path(nap_sid), filters)
    }
}

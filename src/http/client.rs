//! Authenticated HTTP client
//!
//! Wraps `reqwest` with the account-scoped base URL, HTTP Basic credentials
//! and the response handling shared by every resource service: non-2xx
//! responses are turned into structured API errors, 2xx bodies are decoded
//! as JSON.

use crate::error::{Error, Result};
use crate::params::Params;
use crate::resources::{
    CommandService, FleetService, NetworkAccessProfileService, NetworkService, SimService,
    SmsCommandService, UsageRecordService,
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Public endpoint of the Super SIM v1 API.
pub const DEFAULT_BASE_URL: &str = "https://supersim.twilio.com/v1";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all relative request paths
    pub base_url: String,
    /// Account identifier, used as the Basic auth username
    pub account_sid: String,
    /// Auth token, used as the Basic auth password
    pub auth_token: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_sid: String::new(),
            auth_token: String::new(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("supersim-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for the client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the account SID and auth token
    pub fn credentials(mut self, account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        self.config.account_sid = account_sid.into();
        self.config.auth_token = auth_token.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Structured error document returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<u32>,
    message: String,
}

/// Authenticated API client
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a client for the public endpoint with the given credentials.
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        Self::with_config(
            ClientConfig::builder()
                .credentials(account_sid, auth_token)
                .build(),
        )
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(Error::config("account SID and auth token are required"));
        }
        url::Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self { http, config })
    }

    // ============================================================================
    // Resource services
    // ============================================================================

    /// SIM provisioning and lifecycle
    pub fn sims(&self) -> SimService<'_> {
        SimService::new(self)
    }

    /// Fleet configuration
    pub fn fleets(&self) -> FleetService<'_> {
        FleetService::new(self)
    }

    /// Cellular networks available to SIMs
    pub fn networks(&self) -> NetworkService<'_> {
        NetworkService::new(self)
    }

    /// Network access profiles and their network attachments
    pub fn network_access_profiles(&self) -> NetworkAccessProfileService<'_> {
        NetworkAccessProfileService::new(self)
    }

    /// Data usage reporting
    pub fn usage_records(&self) -> UsageRecordService<'_> {
        UsageRecordService::new(self)
    }

    /// IP commands to and from SIMs
    pub fn commands(&self) -> CommandService<'_> {
        CommandService::new(self)
    }

    /// SMS commands to and from SIMs
    pub fn sms_commands(&self) -> SmsCommandService<'_> {
        SmsCommandService::new(self)
    }

    // ============================================================================
    // Request primitives
    // ============================================================================

    /// GET a collection path with query parameters, decoding the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Params,
    ) -> Result<T> {
        let response = self.request(Method::GET, path, Some(query), None).await?;
        Self::decode_body(response).await
    }

    /// GET a previously returned continuation URL verbatim.
    ///
    /// The URL already embeds page size, token and the original filters, so
    /// no query parameters are attached.
    pub(crate) async fn get_url_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.request(Method::GET, url, None, None).await?;
        Self::decode_body(response).await
    }

    /// GET a single resource at `{path}/{sid}`.
    pub(crate) async fn get_resource<T: DeserializeOwned>(&self, path: &str, sid: &str) -> Result<T> {
        let response = self
            .request(Method::GET, &format!("{path}/{sid}"), None, None)
            .await?;
        Self::decode_body(response).await
    }

    /// POST a form-encoded body to a collection path, creating a resource.
    pub(crate) async fn create_resource<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        let response = self.request(Method::POST, path, None, Some(params)).await?;
        Self::decode_body(response).await
    }

    /// POST a form-encoded body to `{path}/{sid}`, updating a resource.
    ///
    /// The decoded response is always a brand-new record; nothing is patched
    /// in place.
    pub(crate) async fn update_resource<T: DeserializeOwned>(
        &self,
        path: &str,
        sid: &str,
        params: &Params,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, &format!("{path}/{sid}"), None, Some(params))
            .await?;
        Self::decode_body(response).await
    }

    /// DELETE `{path}/{sid}`.
    pub(crate) async fn delete_resource(&self, path: &str, sid: &str) -> Result<()> {
        self.request(Method::DELETE, &format!("{path}/{sid}"), None, None)
            .await?;
        Ok(())
    }

    /// Issue one request and map non-2xx statuses to errors.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&Params>,
        form: Option<&Params>,
    ) -> Result<Response> {
        let full_url = self.build_url(path);

        let mut req = self
            .http
            .request(method.clone(), &full_url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token));

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(query) = query {
            if !query.is_empty() {
                req = req.query(query);
            }
        }

        if let Some(form) = form {
            req = req.form(form);
        }

        debug!("{} {}", method, full_url);
        let response = req.send().await.map_err(Error::Http)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(Self::status_error(status, response).await)
    }

    /// Decode a 2xx response body as JSON.
    async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await.map_err(Error::Http)?;
        serde_json::from_str(&body).map_err(|e| Error::decode(e.to_string()))
    }

    /// Turn a non-2xx response into the richest error the body allows.
    async fn status_error(status: StatusCode, response: Response) -> Error {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api) => Error::Api {
                status: status.as_u16(),
                code: api.code,
                message: api.message,
            },
            Err(_) => Error::http_status(status.as_u16(), body),
        }
    }

    /// Build full URL from a path; absolute URLs pass through untouched.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("account_sid", &self.config.account_sid)
            .finish_non_exhaustive()
    }
}

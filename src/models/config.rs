//! Configuration models loaded from external sources.

use serde::Deserialize;
#[cfg(feature = "server")]
use validator::Validate;

#[cfg(feature = "server")]
#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings of the search server binary.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// XML dataset scanned on every request.
    #[validate(length(min = 1))]
    pub dataset_path: String,
    /// Exact value expected in the `AccessToken` header.
    #[validate(length(min = 1))]
    pub access_token: String,
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of a [`crate::client::SearchClient`].
pub struct ClientConfig {
    pub url: String,
    pub access_token: String,
    /// Per-request deadline; no deadline when absent.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

use crate::core::{Error, Result};
use std::env;

/// Sandbox environment configuration for the conformance suite.
///
/// Everything comes from the environment (or a `.env` file); handles are
/// passed explicitly to the client rather than held in global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Partner id issued for the sandbox (`X-PARTNER-ID` header).
    pub partner_id: String,
    /// Channel id issued for the sandbox (`CHANNEL-ID` header).
    pub channel_id: String,
    /// Shared secret used by the request signer.
    pub client_secret: String,
    /// Origin sent with every request.
    pub origin: String,
    /// Merchant id patched into fixture requests that carry a `merchantId`
    /// field. Optional: fixtures keep their baked-in value without it.
    pub merchant_id: Option<String>,
    /// Base URL of the sandbox API.
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first
    /// if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            partner_id: require("X_PARTNER_ID")?,
            channel_id: require("CHANNEL_ID")?,
            client_secret: require("CLIENT_SECRET")?,
            origin: env::var("ORIGIN").unwrap_or_else(|_| "https://sandbox.partner.local".to_string()),
            merchant_id: env::var("MERCHANT_ID").ok(),
            base_url: env::var("SANDBOX_BASE_URL")
                .unwrap_or_else(|_| "https://api.sandbox.dana.id".to_string()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::config(format!("{name} not set")))
}

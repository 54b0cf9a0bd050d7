//! Thin sandbox client boundary.
//!
//! The conformance core treats the platform SDK as an opaque collaborator:
//! the client signs a request, POSTs it, and hands back the parsed response
//! body. Outcomes are encoded in the body's `responseCode`, so non-2xx
//! statuses still yield a body for assertion rather than an error.

use crate::config::Config;
use crate::core::{Error, Result};
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod disbursement;
pub mod payment_gateway;
pub mod signer;
pub mod widget;

pub use disbursement::DisbursementApi;
pub use payment_gateway::PaymentGatewayApi;
pub use signer::Signer;
pub use widget::WidgetApi;

/// HTTP client for the sandbox environment, carrying the partner
/// credentials and the request signer.
pub struct SandboxClient {
    http: ClientWithMiddleware,
    config: Config,
    signer: Signer,
}

impl SandboxClient {
    /// Build a client from configuration. Transient transport failures are
    /// retried with exponential backoff.
    pub fn new(config: Config) -> Self {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
        let http = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        let signer = Signer::new(config.client_secret.clone());
        Self {
            http,
            config,
            signer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Disbursement API family.
    pub fn disbursement(&self) -> DisbursementApi<'_> {
        DisbursementApi::new(self)
    }

    /// Payment-gateway API family.
    pub fn payment_gateway(&self) -> PaymentGatewayApi<'_> {
        PaymentGatewayApi::new(self)
    }

    /// Widget API family.
    pub fn widget(&self) -> WidgetApi<'_> {
        WidgetApi::new(self)
    }

    /// POST a signed request to `resource_path` and return the parsed
    /// response body.
    pub async fn execute(&self, resource_path: &str, body: &Value) -> Result<Value> {
        self.execute_with_headers(resource_path, body, &[]).await
    }

    /// Like [`execute`](Self::execute), with header overrides applied last.
    /// Used by negative cases that need an invalid signature or a missing
    /// timestamp.
    pub async fn execute_with_headers(
        &self,
        resource_path: &str,
        body: &Value,
        overrides: &[(&str, &str)],
    ) -> Result<Value> {
        let payload = serde_json::to_string(body)?;
        let timestamp = jakarta_timestamp(Utc::now());
        let signature = self.signer.sign("POST", resource_path, &payload, &timestamp)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        insert_header(&mut headers, "x-partner-id", &self.config.partner_id)?;
        insert_header(&mut headers, "channel-id", &self.config.channel_id)?;
        insert_header(&mut headers, "origin", &self.config.origin)?;
        insert_header(&mut headers, "x-external-id", &Uuid::new_v4().to_string())?;
        insert_header(&mut headers, "x-timestamp", &timestamp)?;
        insert_header(&mut headers, "x-signature", &signature)?;
        for (name, value) in overrides {
            insert_header(&mut headers, name, value)?;
        }

        let url = format!("{}{}", self.config.base_url, resource_path);
        let response = self.http.post(&url).headers(headers).body(payload).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, resource_path, "sandbox response received");

        serde_json::from_str(&text).map_err(|_| {
            Error::internal(format!(
                "sandbox returned a non-JSON body for {resource_path} (status {status})"
            ))
        })
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::internal(format!("invalid header name: {name}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|_| Error::internal(format!("invalid value for header {name}")))?;
    headers.insert(name, value);
    Ok(())
}

/// SNAP request timestamp: seconds precision in the platform's home
/// timezone (UTC+07:00), e.g. `2025-01-01T09:30:00+07:00`.
pub fn jakarta_timestamp(now: DateTime<Utc>) -> String {
    let jakarta = FixedOffset::east_opt(7 * 3600).expect("UTC+7 is a valid offset");
    now.with_timezone(&jakarta)
        .format("%Y-%m-%dT%H:%M:%S%:z")
        .to_string()
}

/// Whether a parsed sandbox body looks like the transient "inconsistent
/// request" failure the platform intermittently returns for reused
/// reference numbers.
fn is_inconsistent(body: &Value) -> bool {
    let code = body.get("responseCode").and_then(Value::as_str).unwrap_or("");
    let message = body
        .get("responseMessage")
        .and_then(Value::as_str)
        .unwrap_or("");
    code.starts_with('5')
        || message.contains("General Error")
        || message.contains("Internal Server Error")
}

/// Re-run `operation` up to `max_attempts` times while it either fails or
/// returns a transient server-error body, sleeping `delay` between
/// attempts. The final outcome (success or not) is returned as-is.
pub async fn retry_on_inconsistent_request<F, Fut>(
    mut operation: F,
    max_attempts: usize,
    delay: Duration,
) -> Result<Value>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Value>>,
{
    let mut outcome = operation().await;
    for attempt in 1..max_attempts {
        let retryable = match &outcome {
            Ok(body) => is_inconsistent(body),
            Err(_) => true,
        };
        if !retryable {
            break;
        }
        warn!(attempt, "inconsistent sandbox response, retrying after delay");
        tokio::time::sleep(delay).await;
        outcome = operation().await;
    }
    outcome
}

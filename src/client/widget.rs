use super::SandboxClient;
use crate::core::Result;
use serde_json::Value;

/// Widget API operations: the OAuth-bound account surface (token exchange,
/// payments, order lifecycle, account queries and unbinding).
///
/// `apply_token` consumes an auth code minted by the browser-driven OAuth
/// redirect, which is outside this suite; live tests that need it stay
/// ignored without one.
pub struct WidgetApi<'a> {
    client: &'a SandboxClient,
}

impl<'a> WidgetApi<'a> {
    pub(crate) fn new(client: &'a SandboxClient) -> Self {
        Self { client }
    }

    pub async fn apply_token(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/access-token/b2b2c.htm", request)
            .await
    }

    pub async fn apply_ott(&self, request: &Value) -> Result<Value> {
        self.client.execute("/v1.0/qr/apply-ott.htm", request).await
    }

    pub async fn payment(&self, request: &Value) -> Result<Value> {
        self.client.execute("/v1.0/debit/payment.htm", request).await
    }

    pub async fn query_order(&self, request: &Value) -> Result<Value> {
        self.client.execute("/v1.0/debit/status.htm", request).await
    }

    pub async fn cancel_order(&self, request: &Value) -> Result<Value> {
        self.client.execute("/v1.0/debit/cancel.htm", request).await
    }

    pub async fn refund_order(&self, request: &Value) -> Result<Value> {
        self.client.execute("/v1.0/debit/refund.htm", request).await
    }

    pub async fn balance_inquiry(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/balance-inquiry.htm", request)
            .await
    }

    pub async fn transaction_list(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/transaction-list.htm", request)
            .await
    }

    pub async fn account_unbinding(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/registration-account-unbinding.htm", request)
            .await
    }
}

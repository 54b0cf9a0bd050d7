use super::SandboxClient;
use crate::core::Result;
use serde_json::Value;

/// Payment-gateway API operations: host-to-host order lifecycle.
pub struct PaymentGatewayApi<'a> {
    client: &'a SandboxClient,
}

impl<'a> PaymentGatewayApi<'a> {
    pub(crate) fn new(client: &'a SandboxClient) -> Self {
        Self { client }
    }

    pub async fn consult_pay(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/payment-gateway/consult-pay.htm", request)
            .await
    }

    pub async fn create_order(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/payment-gateway/v1.0/debit/payment-host-to-host.htm", request)
            .await
    }

    pub async fn query_payment(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/payment-gateway/v1.0/debit/status.htm", request)
            .await
    }

    pub async fn cancel_order(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/payment-gateway/v1.0/debit/cancel.htm", request)
            .await
    }

    pub async fn refund_order(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/payment-gateway/v1.0/debit/refund.htm", request)
            .await
    }
}

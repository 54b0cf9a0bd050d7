use super::SandboxClient;
use crate::core::Result;
use serde_json::Value;

/// Disbursement API operations: transfers out of the merchant balance to
/// bank accounts or platform wallets, plus the matching inquiries.
pub struct DisbursementApi<'a> {
    client: &'a SandboxClient,
}

impl<'a> DisbursementApi<'a> {
    pub(crate) fn new(client: &'a SandboxClient) -> Self {
        Self { client }
    }

    pub async fn bank_account_inquiry(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/emoney/bank-account-inquiry.htm", request)
            .await
    }

    pub async fn transfer_to_bank(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/emoney/transfer-bank.htm", request)
            .await
    }

    pub async fn transfer_to_bank_inquiry_status(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/emoney/transfer-bank-status.htm", request)
            .await
    }

    pub async fn wallet_account_inquiry(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/emoney/account-inquiry.htm", request)
            .await
    }

    pub async fn transfer_to_wallet(&self, request: &Value) -> Result<Value> {
        self.client.execute("/v1.0/emoney/topup.htm", request).await
    }

    pub async fn transfer_to_wallet_inquiry_status(&self, request: &Value) -> Result<Value> {
        self.client
            .execute("/v1.0/emoney/topup-status.htm", request)
            .await
    }
}

use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;

/// Razorpay Fund Accounts APIs client.
#[derive(Clone, Debug)]
pub struct FundAccountsApi {
    inner: Arc<RazorpayClientInner>,
}

impl FundAccountsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the fund accounts of a customer.
    #[tracing::instrument(name = "List Fund Accounts", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/fund_accounts", filters)
            .await
    }

    /// Creates a fund account for a customer.
    #[tracing::instrument(name = "Create Fund Account", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/fund_accounts", Some(data))
            .await
    }
}

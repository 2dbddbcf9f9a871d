use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Refunds APIs client.
#[derive(Clone, Debug)]
pub struct RefundsApi {
    inner: Arc<RazorpayClientInner>,
}

impl RefundsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a standalone refund for a payment.
    #[tracing::instrument(name = "Create Refund", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/refunds", Some(data))
            .await
    }

    /// Lists all refunds.
    #[tracing::instrument(name = "List Refunds", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner.execute(Method::Get, "/v1/refunds", filters).await
    }

    /// Gets the details of an existing refund.
    #[tracing::instrument(name = "Fetch Refund", skip(self, filters))]
    pub async fn fetch(&self, refund_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/refunds/{}", encode(refund_id)),
                filters,
            )
            .await
    }

    /// Updates the notes of an existing refund.
    #[tracing::instrument(name = "Update Refund", skip(self, data))]
    pub async fn edit(&self, refund_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/refunds/{}", encode(refund_id)),
                Some(data),
            )
            .await
    }
}

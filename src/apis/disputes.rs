use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Disputes APIs client.
#[derive(Clone, Debug)]
pub struct DisputesApi {
    inner: Arc<RazorpayClientInner>,
}

impl DisputesApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the details of an existing dispute.
    #[tracing::instrument(name = "Fetch Dispute", skip(self, filters))]
    pub async fn fetch(&self, dispute_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/disputes/{}", encode(dispute_id)),
                filters,
            )
            .await
    }

    /// Accepts a dispute, conceding it to the customer.
    #[tracing::instrument(name = "Accept Dispute", skip(self, data))]
    pub async fn accept(&self, dispute_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/disputes/{}/accept", encode(dispute_id)),
                data,
            )
            .await
    }

    /// Contests a dispute with supporting evidence.
    #[tracing::instrument(name = "Contest Dispute", skip(self, data))]
    pub async fn contest(&self, dispute_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/disputes/{}/contest", encode(dispute_id)),
                Some(data),
            )
            .await
    }

    /// Lists all disputes.
    #[tracing::instrument(name = "List Disputes", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/disputes", filters)
            .await
    }
}

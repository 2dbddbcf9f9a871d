use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Settlements APIs client.
#[derive(Clone, Debug)]
pub struct SettlementsApi {
    inner: Arc<RazorpayClientInner>,
}

impl SettlementsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all settlements.
    #[tracing::instrument(name = "List Settlements", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/settlements", filters)
            .await
    }

    /// Gets the details of an existing settlement.
    #[tracing::instrument(name = "Fetch Settlement", skip(self, filters))]
    pub async fn fetch(&self, settlement_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/settlements/{}", encode(settlement_id)),
                filters,
            )
            .await
    }

    /// Gets the combined settlement recon report for a month.
    #[tracing::instrument(name = "Fetch Settlement Recon Report", skip(self, filters))]
    pub async fn report(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/settlements/recon/combined", filters)
            .await
    }

    /// Creates an on-demand settlement.
    #[tracing::instrument(name = "Create Ondemand Settlement", skip(self, data))]
    pub async fn create_ondemand(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/settlements/ondemand", Some(data))
            .await
    }

    /// Lists all on-demand settlements.
    #[tracing::instrument(name = "List Ondemand Settlements", skip(self, filters))]
    pub async fn all_ondemand(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/settlements/ondemand", filters)
            .await
    }

    /// Gets the details of an on-demand settlement.
    #[tracing::instrument(name = "Fetch Ondemand Settlement", skip(self, filters))]
    pub async fn fetch_ondemand(
        &self,
        settlement_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/settlements/ondemand/{}", encode(settlement_id)),
                filters,
            )
            .await
    }
}

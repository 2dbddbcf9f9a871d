use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Plans APIs client.
#[derive(Clone, Debug)]
pub struct PlansApi {
    inner: Arc<RazorpayClientInner>,
}

impl PlansApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new plan.
    #[tracing::instrument(name = "Create Plan", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/plans", Some(data))
            .await
    }

    /// Gets the details of an existing plan.
    #[tracing::instrument(name = "Fetch Plan", skip(self, filters))]
    pub async fn fetch(&self, plan_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/plans/{}", encode(plan_id)),
                filters,
            )
            .await
    }

    /// Lists all plans.
    #[tracing::instrument(name = "List Plans", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner.execute(Method::Get, "/v1/plans", filters).await
    }
}

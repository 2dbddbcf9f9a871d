use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Orders APIs client.
#[derive(Clone, Debug)]
pub struct OrdersApi {
    inner: Arc<RazorpayClientInner>,
}

impl OrdersApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all orders.
    #[tracing::instrument(name = "List Orders", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner.execute(Method::Get, "/v1/orders", filters).await
    }

    /// Gets the details of an existing order.
    #[tracing::instrument(name = "Fetch Order", skip(self, filters))]
    pub async fn fetch(&self, order_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/orders/{}", encode(order_id)),
                filters,
            )
            .await
    }

    /// Creates a new order.
    #[tracing::instrument(name = "Create Order", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/orders", Some(data))
            .await
    }

    /// Updates the notes of an existing order.
    #[tracing::instrument(name = "Update Order", skip(self, data))]
    pub async fn edit(&self, order_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/orders/{}", encode(order_id)),
                Some(data),
            )
            .await
    }

    /// Lists the payments made against an order.
    #[tracing::instrument(name = "List Order Payments", skip(self, filters))]
    pub async fn payments(&self, order_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/orders/{}/payments", encode(order_id)),
                filters,
            )
            .await
    }

    /// Views the RTO risk reasons for an order.
    #[tracing::instrument(name = "Review Order RTO Risk", skip(self, data))]
    pub async fn rto_review(&self, order_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/orders/{}/rto_review", encode(order_id)),
                data,
            )
            .await
    }

    /// Updates the fulfillment details of an order.
    #[tracing::instrument(name = "Update Order Fulfillment", skip(self, data))]
    pub async fn edit_fulfillment(&self, order_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/orders/{}/fulfillment", encode(order_id)),
                Some(data),
            )
            .await
    }
}

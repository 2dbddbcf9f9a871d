use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Items APIs client.
#[derive(Clone, Debug)]
pub struct ItemsApi {
    inner: Arc<RazorpayClientInner>,
}

impl ItemsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new item.
    #[tracing::instrument(name = "Create Item", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/items", Some(data))
            .await
    }

    /// Gets the details of an existing item.
    #[tracing::instrument(name = "Fetch Item", skip(self, filters))]
    pub async fn fetch(&self, item_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/items/{}", encode(item_id)),
                filters,
            )
            .await
    }

    /// Lists all items.
    #[tracing::instrument(name = "List Items", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner.execute(Method::Get, "/v1/items", filters).await
    }

    /// Updates an existing item.
    #[tracing::instrument(name = "Update Item", skip(self, data))]
    pub async fn edit(&self, item_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/items/{}", encode(item_id)),
                Some(data),
            )
            .await
    }

    /// Deletes an item. The endpoint responds with an empty array.
    #[tracing::instrument(name = "Delete Item", skip(self))]
    pub async fn delete(&self, item_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!("/v1/items/{}", encode(item_id)),
                None,
            )
            .await
    }
}

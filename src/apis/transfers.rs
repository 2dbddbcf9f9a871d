use crate::{
    apis::{render_scalar, Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Transfers APIs client.
#[derive(Clone, Debug)]
pub struct TransfersApi {
    inner: Arc<RazorpayClientInner>,
}

impl TransfersApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists transfers. A `payment_id` filter routes the call to the
    /// payment-scoped transfer listing instead of the flat collection.
    #[tracing::instrument(name = "List Transfers", skip(self, filters))]
    pub async fn all(&self, mut filters: Option<Value>) -> Result<Value, Error> {
        let payment_id = filters
            .as_mut()
            .and_then(Value::as_object_mut)
            .and_then(|object| object.remove("payment_id"));

        if let Some(payment_id) = payment_id {
            let path = format!(
                "/v1/payments/{}/transfers",
                encode(&render_scalar(&payment_id))
            );
            return self.inner.execute(Method::Get, &path, filters).await;
        }

        self.inner
            .execute(Method::Get, "/v1/transfers", filters)
            .await
    }

    /// Gets the details of an existing transfer.
    #[tracing::instrument(name = "Fetch Transfer", skip(self, filters))]
    pub async fn fetch(&self, transfer_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/transfers/{}", encode(transfer_id)),
                filters,
            )
            .await
    }

    /// Creates a direct transfer to a linked account.
    #[tracing::instrument(name = "Create Transfer", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/transfers", Some(data))
            .await
    }

    /// Updates an existing transfer.
    pub async fn edit(&self, transfer_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/transfers/{}", encode(transfer_id)),
                Some(data),
            )
            .await
    }

    /// Reverses a transfer, fully or partially.
    #[tracing::instrument(name = "Reverse Transfer", skip(self, data))]
    pub async fn reverse(&self, transfer_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/transfers/{}/reversals", encode(transfer_id)),
                data,
            )
            .await
    }

    /// Lists the reversals of a transfer.
    pub async fn reversals(&self, transfer_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/transfers/{}/reversals", encode(transfer_id)),
                filters,
            )
            .await
    }
}

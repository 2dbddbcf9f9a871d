use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Payment Links APIs client.
#[derive(Clone, Debug)]
pub struct PaymentLinksApi {
    inner: Arc<RazorpayClientInner>,
}

impl PaymentLinksApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all payment links.
    #[tracing::instrument(name = "List Payment Links", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/payment_links", filters)
            .await
    }

    /// Gets the details of an existing payment link.
    #[tracing::instrument(name = "Fetch Payment Link", skip(self, filters))]
    pub async fn fetch(
        &self,
        payment_link_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payment_links/{}", encode(payment_link_id)),
                filters,
            )
            .await
    }

    /// Creates a new payment link.
    #[tracing::instrument(name = "Create Payment Link", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/payment_links", Some(data))
            .await
    }

    /// Cancels an unpaid payment link.
    #[tracing::instrument(name = "Cancel Payment Link", skip(self))]
    pub async fn cancel(&self, payment_link_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payment_links/{}/cancel", encode(payment_link_id)),
                None,
            )
            .await
    }

    /// Updates an existing payment link.
    #[tracing::instrument(name = "Update Payment Link", skip(self, data))]
    pub async fn edit(&self, payment_link_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/payment_links/{}", encode(payment_link_id)),
                Some(data),
            )
            .await
    }

    /// Resends the link to the customer by the given medium, `sms` or `email`.
    #[tracing::instrument(name = "Notify Payment Link", skip(self))]
    pub async fn notify_by(&self, payment_link_id: &str, medium: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!(
                    "/v1/payment_links/{}/notify_by/{}",
                    encode(payment_link_id),
                    encode(medium)
                ),
                None,
            )
            .await
    }
}

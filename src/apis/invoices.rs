use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Invoices APIs client.
#[derive(Clone, Debug)]
pub struct InvoicesApi {
    inner: Arc<RazorpayClientInner>,
}

impl InvoicesApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all invoices.
    #[tracing::instrument(name = "List Invoices", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/invoices", filters)
            .await
    }

    /// Gets the details of an existing invoice.
    #[tracing::instrument(name = "Fetch Invoice", skip(self, filters))]
    pub async fn fetch(&self, invoice_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/invoices/{}", encode(invoice_id)),
                filters,
            )
            .await
    }

    /// Creates a new invoice.
    #[tracing::instrument(name = "Create Invoice", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/invoices", Some(data))
            .await
    }

    /// Notifies the customer by the given medium, `sms` or `email`.
    #[tracing::instrument(name = "Notify Invoice", skip(self))]
    pub async fn notify_by(&self, invoice_id: &str, medium: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!(
                    "/v1/invoices/{}/notify_by/{}",
                    encode(invoice_id),
                    encode(medium)
                ),
                None,
            )
            .await
    }

    /// Cancels an unpaid invoice.
    #[tracing::instrument(name = "Cancel Invoice", skip(self))]
    pub async fn cancel(&self, invoice_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/invoices/{}/cancel", encode(invoice_id)),
                None,
            )
            .await
    }

    /// Deletes a draft invoice. The endpoint responds with an empty array.
    #[tracing::instrument(name = "Delete Invoice", skip(self))]
    pub async fn delete(&self, invoice_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!("/v1/invoices/{}", encode(invoice_id)),
                None,
            )
            .await
    }

    /// Issues a draft invoice to the customer.
    #[tracing::instrument(name = "Issue Invoice", skip(self))]
    pub async fn issue(&self, invoice_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/invoices/{}/issue", encode(invoice_id)),
                None,
            )
            .await
    }

    /// Updates an invoice. All attributes are editable while it is a draft.
    #[tracing::instrument(name = "Update Invoice", skip(self, data))]
    pub async fn edit(&self, invoice_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/invoices/{}", encode(invoice_id)),
                Some(data),
            )
            .await
    }
}

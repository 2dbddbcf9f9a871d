use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay QR Codes APIs client.
#[derive(Clone, Debug)]
pub struct QrCodesApi {
    inner: Arc<RazorpayClientInner>,
}

impl QrCodesApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new QR code.
    #[tracing::instrument(name = "Create QR Code", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/payments/qr_codes", Some(data))
            .await
    }

    /// Gets the details of an existing QR code.
    #[tracing::instrument(name = "Fetch QR Code", skip(self, filters))]
    pub async fn fetch(&self, qr_code_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/qr_codes/{}", encode(qr_code_id)),
                filters,
            )
            .await
    }

    /// Lists all QR codes.
    #[tracing::instrument(name = "List QR Codes", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/payments/qr_codes", filters)
            .await
    }

    /// Lists the payments made on a QR code.
    #[tracing::instrument(name = "List QR Code Payments", skip(self, filters))]
    pub async fn payments(&self, qr_code_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/qr_codes/{}/payments", encode(qr_code_id)),
                filters,
            )
            .await
    }

    /// Closes a QR code.
    #[tracing::instrument(name = "Close QR Code", skip(self))]
    pub async fn close(&self, qr_code_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payments/qr_codes/{}/close", encode(qr_code_id)),
                None,
            )
            .await
    }
}

use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::{json, Value};
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Payments APIs client.
#[derive(Clone, Debug)]
pub struct PaymentsApi {
    inner: Arc<RazorpayClientInner>,
}

impl PaymentsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all payments.
    #[tracing::instrument(name = "List Payments", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/payments", filters)
            .await
    }

    /// Gets the details of an existing payment.
    #[tracing::instrument(name = "Fetch Payment", skip(self, filters))]
    pub async fn fetch(&self, payment_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/{}", encode(payment_id)),
                filters,
            )
            .await
    }

    /// Updates the notes of an existing payment.
    #[tracing::instrument(name = "Update Payment", skip(self, data))]
    pub async fn edit(&self, payment_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/payments/{}", encode(payment_id)),
                Some(data),
            )
            .await
    }

    /// Captures an authorized payment for the given amount.
    ///
    /// The amount is in the smallest currency unit and must match the amount
    /// the payment was authorized for.
    #[tracing::instrument(name = "Capture Payment", skip(self, data), fields(amount = %amount))]
    pub async fn capture(
        &self,
        payment_id: &str,
        amount: i64,
        data: Option<Value>,
    ) -> Result<Value, Error> {
        let mut data = data.unwrap_or_else(|| json!({}));
        if let Some(object) = data.as_object_mut() {
            object.insert("amount".to_owned(), amount.into());
        }
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payments/{}/capture", encode(payment_id)),
                Some(data),
            )
            .await
    }

    /// Refunds a captured payment. Without an amount the full amount is
    /// refunded.
    #[tracing::instrument(name = "Refund Payment", skip(self, data))]
    pub async fn refund(
        &self,
        payment_id: &str,
        amount: Option<i64>,
        data: Option<Value>,
    ) -> Result<Value, Error> {
        let mut data = data.unwrap_or_else(|| json!({}));
        if let (Some(amount), Some(object)) = (amount, data.as_object_mut()) {
            object.insert("amount".to_owned(), amount.into());
        }
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payments/{}/refund", encode(payment_id)),
                Some(data),
            )
            .await
    }

    /// Lists the refunds of a payment.
    #[tracing::instrument(name = "List Payment Refunds", skip(self, filters))]
    pub async fn refunds(&self, payment_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/{}/refunds", encode(payment_id)),
                filters,
            )
            .await
    }

    /// Gets a specific refund of a payment.
    #[tracing::instrument(name = "Fetch Payment Refund", skip(self))]
    pub async fn refund_by_id(&self, payment_id: &str, refund_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!(
                    "/v1/payments/{}/refunds/{}",
                    encode(payment_id),
                    encode(refund_id)
                ),
                None,
            )
            .await
    }

    /// Creates a transfer out of a payment.
    #[tracing::instrument(name = "Create Payment Transfer", skip(self, data))]
    pub async fn transfer(&self, payment_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payments/{}/transfers", encode(payment_id)),
                data,
            )
            .await
    }

    /// Lists the transfers created out of a payment.
    #[tracing::instrument(name = "List Payment Transfers", skip(self, filters))]
    pub async fn transfers(&self, payment_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/{}/transfers", encode(payment_id)),
                filters,
            )
            .await
    }

    /// Gets the bank transfer entity of a payment.
    #[tracing::instrument(name = "Fetch Bank Transfer", skip(self, filters))]
    pub async fn bank_transfer(
        &self,
        payment_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/{}/bank_transfer", encode(payment_id)),
                filters,
            )
            .await
    }

    /// Gets the UPI transfer entity of a payment.
    #[tracing::instrument(name = "Fetch UPI Transfer", skip(self, filters))]
    pub async fn upi_transfer(
        &self,
        payment_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/{}/upi_transfer", encode(payment_id)),
                filters,
            )
            .await
    }

    /// Gets the expanded card details of a payment.
    #[tracing::instrument(name = "Fetch Card Details", skip(self))]
    pub async fn card_details(&self, payment_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/{}/card", encode(payment_id)),
                None,
            )
            .await
    }

    /// Lists payment downtimes.
    #[tracing::instrument(name = "List Payment Downtimes", skip(self))]
    pub async fn downtimes(&self) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/payments/downtimes", None)
            .await
    }

    /// Gets a payment downtime by its id.
    #[tracing::instrument(name = "Fetch Payment Downtime", skip(self))]
    pub async fn downtime_by_id(&self, downtime_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/payments/downtimes/{}", encode(downtime_id)),
                None,
            )
            .await
    }

    /// Creates a payment over the s2s JSON flow.
    #[tracing::instrument(name = "Create Payment Json", skip(self, data))]
    pub async fn create_json(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/payments/create/json", Some(data))
            .await
    }

    /// Creates a recurring payment against a saved token.
    #[tracing::instrument(name = "Create Recurring Payment", skip(self, data))]
    pub async fn create_recurring(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/payments/create/recurring", Some(data))
            .await
    }

    /// Initiates a UPI payment.
    #[tracing::instrument(name = "Create UPI Payment", skip(self, data))]
    pub async fn create_upi(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/payments/create/upi", Some(data))
            .await
    }

    /// Validates a VPA handle.
    #[tracing::instrument(name = "Validate VPA", skip(self, data))]
    pub async fn validate_vpa(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/payments/validate/vpa", Some(data))
            .await
    }

    /// Lists the payment methods enabled on the account.
    #[tracing::instrument(name = "List Payment Methods", skip(self))]
    pub async fn payment_methods(&self) -> Result<Value, Error> {
        self.inner.execute(Method::Get, "/v1/methods", None).await
    }

    /// Generates an OTP for a payment.
    #[tracing::instrument(name = "Generate OTP", skip(self, data))]
    pub async fn otp_generate(&self, payment_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payments/{}/otp_generate", encode(payment_id)),
                data,
            )
            .await
    }

    /// Submits the OTP entered by the customer.
    #[tracing::instrument(name = "Submit OTP", skip(self, data))]
    pub async fn otp_submit(&self, payment_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payments/{}/otp/submit", encode(payment_id)),
                Some(data),
            )
            .await
    }

    /// Resends the OTP for a payment.
    #[tracing::instrument(name = "Resend OTP", skip(self, data))]
    pub async fn otp_resend(&self, payment_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/payments/{}/otp/resend", encode(payment_id)),
                data,
            )
            .await
    }
}

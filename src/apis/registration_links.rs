use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;

/// Razorpay Registration Links APIs client.
#[derive(Clone, Debug)]
pub struct RegistrationLinksApi {
    inner: Arc<RazorpayClientInner>,
}

impl RegistrationLinksApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a registration link authorizing a recurring payment.
    #[tracing::instrument(name = "Create Registration Link", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                "/v1/subscription_registration/auth_links",
                Some(data),
            )
            .await
    }
}

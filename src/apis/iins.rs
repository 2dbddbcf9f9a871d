use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay IIN APIs client.
#[derive(Clone, Debug)]
pub struct IinsApi {
    inner: Arc<RazorpayClientInner>,
}

impl IinsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Fetches card properties for a token IIN.
    #[tracing::instrument(name = "Fetch IIN", skip(self, filters))]
    pub async fn fetch(&self, token_iin: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/iins/{}", encode(token_iin)),
                filters,
            )
            .await
    }

    /// Lists the IINs supporting a given capability, such as native OTP.
    #[tracing::instrument(name = "List IINs", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/iins/list", filters)
            .await
    }
}

use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Cards APIs client.
#[derive(Clone, Debug)]
pub struct CardsApi {
    inner: Arc<RazorpayClientInner>,
}

impl CardsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the details of a card.
    #[tracing::instrument(name = "Fetch Card", skip(self, filters))]
    pub async fn fetch(&self, card_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/cards/{}", encode(card_id)),
                filters,
            )
            .await
    }

    /// Fetches the PAR or network reference id of a card.
    #[tracing::instrument(name = "Request Card Reference", skip(self, data))]
    pub async fn request_card_reference(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/cards/fingerprints", Some(data))
            .await
    }
}

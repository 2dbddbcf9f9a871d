use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Tokens APIs client.
///
/// Token entities live under their customer, so most operations take the
/// owning customer id. The service-provider operations at the bottom work on
/// the flat `/v1/tokens` collection instead.
#[derive(Clone, Debug)]
pub struct TokensApi {
    inner: Arc<RazorpayClientInner>,
}

impl TokensApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new token.
    #[tracing::instrument(name = "Create Token", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/tokens", Some(data))
            .await
    }

    /// Gets a token of a customer.
    #[tracing::instrument(name = "Fetch Token", skip(self, filters))]
    pub async fn fetch(
        &self,
        customer_id: &str,
        token_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!(
                    "/v1/customers/{}/tokens/{}",
                    encode(customer_id),
                    encode(token_id)
                ),
                filters,
            )
            .await
    }

    /// Lists the tokens of a customer.
    #[tracing::instrument(name = "List Tokens", skip(self, filters))]
    pub async fn all(&self, customer_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/customers/{}/tokens", encode(customer_id)),
                filters,
            )
            .await
    }

    /// Deletes a token of a customer.
    pub async fn delete(&self, customer_id: &str, token_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!(
                    "/v1/customers/{}/tokens/{}",
                    encode(customer_id),
                    encode(token_id)
                ),
                None,
            )
            .await
    }

    /// Fetches a token by its value or network reference.
    pub async fn fetch_token(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/tokens/fetch", Some(data))
            .await
    }

    /// Deletes a token by its value or network reference.
    pub async fn delete_token(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/tokens/delete", Some(data))
            .await
    }

    /// Requests the cryptogram needed to process a Razorpay token on another
    /// payment aggregator or gateway.
    pub async fn process_payment_on_alternate_pa_or_pg(
        &self,
        data: Value,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                "/v1/tokens/service_provider_tokens/token_transactional_data",
                Some(data),
            )
            .await
    }
}

use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Products APIs client, for configuring payment products on
/// sub-merchant accounts.
#[derive(Clone, Debug)]
pub struct ProductsApi {
    inner: Arc<RazorpayClientInner>,
}

impl ProductsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Requests a product configuration for an account.
    #[tracing::instrument(name = "Request Product Configuration", skip(self, data))]
    pub async fn request_product_configuration(
        &self,
        account_id: &str,
        data: Value,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v2/accounts/{}/products", encode(account_id)),
                Some(data),
            )
            .await
    }

    /// Gets a product configuration of an account.
    #[tracing::instrument(name = "Fetch Product Configuration", skip(self, filters))]
    pub async fn fetch(
        &self,
        account_id: &str,
        product_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!(
                    "/v2/accounts/{}/products/{}",
                    encode(account_id),
                    encode(product_id)
                ),
                filters,
            )
            .await
    }

    /// Updates a product configuration of an account.
    #[tracing::instrument(name = "Update Product Configuration", skip(self, data))]
    pub async fn edit(
        &self,
        account_id: &str,
        product_id: &str,
        data: Value,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!(
                    "/v2/accounts/{}/products/{}",
                    encode(account_id),
                    encode(product_id)
                ),
                Some(data),
            )
            .await
    }

    /// Fetches the terms and conditions of a product.
    #[tracing::instrument(name = "Fetch Product Tnc", skip(self, filters))]
    pub async fn tnc(&self, product_name: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v2/products/{}/tnc", encode(product_name)),
                filters,
            )
            .await
    }
}

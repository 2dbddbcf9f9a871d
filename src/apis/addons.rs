use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Add-ons APIs client.
#[derive(Clone, Debug)]
pub struct AddonsApi {
    inner: Arc<RazorpayClientInner>,
}

impl AddonsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the details of an existing add-on.
    #[tracing::instrument(name = "Fetch Addon", skip(self, filters))]
    pub async fn fetch(&self, addon_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/addons/{}", encode(addon_id)),
                filters,
            )
            .await
    }

    /// Deletes an add-on that has not been charged yet.
    #[tracing::instrument(name = "Delete Addon", skip(self))]
    pub async fn delete(&self, addon_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!("/v1/addons/{}", encode(addon_id)),
                None,
            )
            .await
    }

    /// Lists all add-ons.
    #[tracing::instrument(name = "List Addons", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner.execute(Method::Get, "/v1/addons", filters).await
    }
}

use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Webhooks APIs client.
///
/// Webhooks exist in two flavors: the merchant's own webhooks on the flat
/// `/v1/webhooks` collection, and webhooks configured on a sub-merchant
/// account under `/v2/accounts/{id}/webhooks`. Passing an `account_id`
/// selects the account-scoped flavor.
#[derive(Clone, Debug)]
pub struct WebhooksApi {
    inner: Arc<RazorpayClientInner>,
}

impl WebhooksApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new webhook.
    #[tracing::instrument(name = "Create Webhook", skip(self, data))]
    pub async fn create(&self, data: Value, account_id: Option<&str>) -> Result<Value, Error> {
        let path = match account_id {
            Some(account_id) => format!("/v2/accounts/{}/webhooks", encode(account_id)),
            None => "/v1/webhooks".to_owned(),
        };
        self.inner.execute(Method::Post, &path, Some(data)).await
    }

    /// Gets the details of an existing webhook.
    #[tracing::instrument(name = "Fetch Webhook", skip(self, filters))]
    pub async fn fetch(
        &self,
        webhook_id: &str,
        account_id: Option<&str>,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        let path = match account_id {
            Some(account_id) => format!(
                "/v2/accounts/{}/webhooks/{}",
                encode(account_id),
                encode(webhook_id)
            ),
            None => format!("/v1/webhooks/{}", encode(webhook_id)),
        };
        self.inner.execute(Method::Get, &path, filters).await
    }

    /// Lists all webhooks.
    #[tracing::instrument(name = "List Webhooks", skip(self, filters))]
    pub async fn all(
        &self,
        filters: Option<Value>,
        account_id: Option<&str>,
    ) -> Result<Value, Error> {
        let path = match account_id {
            Some(account_id) => format!("/v2/accounts/{}/webhooks", encode(account_id)),
            None => "/v1/webhooks".to_owned(),
        };
        self.inner.execute(Method::Get, &path, filters).await
    }

    /// Updates a webhook. Account-scoped webhooks take a partial update over
    /// PATCH; merchant webhooks a full replacement over PUT.
    #[tracing::instrument(name = "Update Webhook", skip(self, data))]
    pub async fn edit(
        &self,
        webhook_id: &str,
        account_id: Option<&str>,
        data: Value,
    ) -> Result<Value, Error> {
        match account_id {
            Some(account_id) => {
                let path = format!(
                    "/v2/accounts/{}/webhooks/{}",
                    encode(account_id),
                    encode(webhook_id)
                );
                self.inner.execute(Method::Patch, &path, Some(data)).await
            }
            None => {
                let path = format!("/v1/webhooks/{}", encode(webhook_id));
                self.inner.execute(Method::Put, &path, Some(data)).await
            }
        }
    }

    /// Deletes a webhook of a sub-merchant account.
    pub async fn delete(&self, webhook_id: &str, account_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!(
                    "/v2/accounts/{}/webhooks/{}",
                    encode(account_id),
                    encode(webhook_id)
                ),
                None,
            )
            .await
    }
}

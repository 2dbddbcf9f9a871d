use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Subscriptions APIs client.
#[derive(Clone, Debug)]
pub struct SubscriptionsApi {
    inner: Arc<RazorpayClientInner>,
}

impl SubscriptionsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all subscriptions.
    #[tracing::instrument(name = "List Subscriptions", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/subscriptions", filters)
            .await
    }

    /// Gets the details of an existing subscription.
    #[tracing::instrument(name = "Fetch Subscription", skip(self, filters))]
    pub async fn fetch(
        &self,
        subscription_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/subscriptions/{}", encode(subscription_id)),
                filters,
            )
            .await
    }

    /// Creates a new subscription on a plan.
    #[tracing::instrument(name = "Create Subscription", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/subscriptions", Some(data))
            .await
    }

    /// Cancels a subscription, immediately or at the end of the cycle.
    #[tracing::instrument(name = "Cancel Subscription", skip(self, data))]
    pub async fn cancel(&self, subscription_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/subscriptions/{}/cancel", encode(subscription_id)),
                data,
            )
            .await
    }

    /// Cancels an update scheduled on a subscription.
    #[tracing::instrument(name = "Cancel Scheduled Changes", skip(self))]
    pub async fn cancel_scheduled_changes(&self, subscription_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!(
                    "/v1/subscriptions/{}/cancel_scheduled_changes",
                    encode(subscription_id)
                ),
                None,
            )
            .await
    }

    /// Gets the details of an update scheduled on a subscription.
    #[tracing::instrument(name = "Fetch Pending Update", skip(self))]
    pub async fn pending_update(&self, subscription_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!(
                    "/v1/subscriptions/{}/retrieve_scheduled_changes",
                    encode(subscription_id)
                ),
                None,
            )
            .await
    }

    /// Creates an add-on charge for the next invoice of a subscription.
    #[tracing::instrument(name = "Create Subscription Addon", skip(self, data))]
    pub async fn create_addon(&self, subscription_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/subscriptions/{}/addons", encode(subscription_id)),
                Some(data),
            )
            .await
    }

    /// Updates an existing subscription.
    #[tracing::instrument(name = "Update Subscription", skip(self, data))]
    pub async fn edit(&self, subscription_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v1/subscriptions/{}", encode(subscription_id)),
                Some(data),
            )
            .await
    }

    /// Pauses an active subscription.
    #[tracing::instrument(name = "Pause Subscription", skip(self, data))]
    pub async fn pause(&self, subscription_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/subscriptions/{}/pause", encode(subscription_id)),
                data,
            )
            .await
    }

    /// Resumes a paused subscription.
    #[tracing::instrument(name = "Resume Subscription", skip(self, data))]
    pub async fn resume(&self, subscription_id: &str, data: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/subscriptions/{}/resume", encode(subscription_id)),
                data,
            )
            .await
    }

    /// Deletes an offer linked to a subscription.
    #[tracing::instrument(name = "Delete Subscription Offer", skip(self))]
    pub async fn delete_offer(
        &self,
        subscription_id: &str,
        offer_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!(
                    "/v1/subscriptions/{}/{}",
                    encode(subscription_id),
                    encode(offer_id)
                ),
                None,
            )
            .await
    }
}

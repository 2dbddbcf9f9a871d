use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Virtual Accounts APIs client.
#[derive(Clone, Debug)]
pub struct VirtualAccountsApi {
    inner: Arc<RazorpayClientInner>,
}

impl VirtualAccountsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Lists all virtual accounts.
    #[tracing::instrument(name = "List Virtual Accounts", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/virtual_accounts", filters)
            .await
    }

    /// Gets the details of an existing virtual account.
    #[tracing::instrument(name = "Fetch Virtual Account", skip(self, filters))]
    pub async fn fetch(
        &self,
        virtual_account_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/virtual_accounts/{}", encode(virtual_account_id)),
                filters,
            )
            .await
    }

    /// Creates a new virtual account.
    #[tracing::instrument(name = "Create Virtual Account", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/virtual_accounts", Some(data))
            .await
    }

    /// Closes a virtual account.
    pub async fn close(
        &self,
        virtual_account_id: &str,
        data: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/virtual_accounts/{}/close", encode(virtual_account_id)),
                data,
            )
            .await
    }

    /// Lists the payments received by a virtual account.
    pub async fn payments(
        &self,
        virtual_account_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!(
                    "/v1/virtual_accounts/{}/payments",
                    encode(virtual_account_id)
                ),
                filters,
            )
            .await
    }

    /// Adds a receiver to an existing virtual account.
    pub async fn add_receiver(
        &self,
        virtual_account_id: &str,
        data: Value,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!(
                    "/v1/virtual_accounts/{}/receivers",
                    encode(virtual_account_id)
                ),
                Some(data),
            )
            .await
    }

    /// Adds an allowed payer account to a virtual account.
    pub async fn add_allowed_payer(
        &self,
        virtual_account_id: &str,
        data: Value,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!(
                    "/v1/virtual_accounts/{}/allowed_payers",
                    encode(virtual_account_id)
                ),
                Some(data),
            )
            .await
    }

    /// Deletes an allowed payer account. The endpoint responds with 204.
    pub async fn delete_allowed_payer(
        &self,
        virtual_account_id: &str,
        allowed_payer_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!(
                    "/v1/virtual_accounts/{}/allowed_payers/{}",
                    encode(virtual_account_id),
                    encode(allowed_payer_id)
                ),
                None,
            )
            .await
    }
}

use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Accounts APIs client, for onboarding sub-merchants.
#[derive(Clone, Debug)]
pub struct AccountsApi {
    inner: Arc<RazorpayClientInner>,
}

impl AccountsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new sub-merchant account.
    #[tracing::instrument(name = "Create Account", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v2/accounts", Some(data))
            .await
    }

    /// Gets the details of an existing account.
    #[tracing::instrument(name = "Fetch Account", skip(self, filters))]
    pub async fn fetch(&self, account_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v2/accounts/{}", encode(account_id)),
                filters,
            )
            .await
    }

    /// Updates an existing account.
    #[tracing::instrument(name = "Update Account", skip(self, data))]
    pub async fn edit(&self, account_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!("/v2/accounts/{}", encode(account_id)),
                Some(data),
            )
            .await
    }

    /// Deletes an account.
    #[tracing::instrument(name = "Delete Account", skip(self))]
    pub async fn delete(&self, account_id: &str) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!("/v2/accounts/{}", encode(account_id)),
                None,
            )
            .await
    }

    /// Uploads a KYC document for an account. `data` carries the file
    /// contents under the `"file"` key and the remaining keys as form fields.
    #[tracing::instrument(name = "Upload Account Document", skip(self, data))]
    pub async fn upload_account_doc(&self, account_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute_upload(
                &format!("/v2/accounts/{}/documents", encode(account_id)),
                data,
            )
            .await
    }

    /// Lists the documents uploaded for an account.
    #[tracing::instrument(name = "List Account Documents", skip(self, filters))]
    pub async fn account_docs(&self, account_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v2/accounts/{}/documents", encode(account_id)),
                filters,
            )
            .await
    }
}

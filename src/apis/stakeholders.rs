use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Stakeholders APIs client. Stakeholders are scoped to a
/// sub-merchant account.
#[derive(Clone, Debug)]
pub struct StakeholdersApi {
    inner: Arc<RazorpayClientInner>,
}

impl StakeholdersApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a stakeholder on an account.
    #[tracing::instrument(name = "Create Stakeholder", skip(self, data))]
    pub async fn create(&self, account_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v2/accounts/{}/stakeholders", encode(account_id)),
                Some(data),
            )
            .await
    }

    /// Gets the details of a stakeholder.
    #[tracing::instrument(name = "Fetch Stakeholder", skip(self, filters))]
    pub async fn fetch(
        &self,
        account_id: &str,
        stakeholder_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!(
                    "/v2/accounts/{}/stakeholders/{}",
                    encode(account_id),
                    encode(stakeholder_id)
                ),
                filters,
            )
            .await
    }

    /// Lists the stakeholders of an account.
    #[tracing::instrument(name = "List Stakeholders", skip(self, filters))]
    pub async fn all(&self, account_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v2/accounts/{}/stakeholders", encode(account_id)),
                filters,
            )
            .await
    }

    /// Updates a stakeholder.
    #[tracing::instrument(name = "Update Stakeholder", skip(self, data))]
    pub async fn edit(
        &self,
        account_id: &str,
        stakeholder_id: &str,
        data: Value,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Patch,
                &format!(
                    "/v2/accounts/{}/stakeholders/{}",
                    encode(account_id),
                    encode(stakeholder_id)
                ),
                Some(data),
            )
            .await
    }

    /// Uploads a KYC document for a stakeholder. `data` carries the file
    /// contents under the `"file"` key and the remaining keys as form fields.
    #[tracing::instrument(name = "Upload Stakeholder Document", skip(self, data))]
    pub async fn upload_stakeholder_doc(
        &self,
        account_id: &str,
        stakeholder_id: &str,
        data: Value,
    ) -> Result<Value, Error> {
        self.inner
            .execute_upload(
                &format!(
                    "/v2/accounts/{}/stakeholders/{}/documents",
                    encode(account_id),
                    encode(stakeholder_id)
                ),
                data,
            )
            .await
    }

    /// Lists the documents uploaded for a stakeholder.
    #[tracing::instrument(name = "List Stakeholder Documents", skip(self, filters))]
    pub async fn stakeholder_docs(
        &self,
        account_id: &str,
        stakeholder_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!(
                    "/v2/accounts/{}/stakeholders/{}/documents",
                    encode(account_id),
                    encode(stakeholder_id)
                ),
                filters,
            )
            .await
    }
}

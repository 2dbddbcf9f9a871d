use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Documents APIs client, for dispute evidence uploads.
#[derive(Clone, Debug)]
pub struct DocumentsApi {
    inner: Arc<RazorpayClientInner>,
}

impl DocumentsApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Uploads a document. `data` carries the file contents under the
    /// `"file"` key and the remaining keys as form fields.
    #[tracing::instrument(name = "Create Document", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner.execute_upload("/v1/documents", data).await
    }

    /// Gets the details of an uploaded document.
    #[tracing::instrument(name = "Fetch Document", skip(self, filters))]
    pub async fn fetch(&self, document_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/documents/{}", encode(document_id)),
                filters,
            )
            .await
    }
}

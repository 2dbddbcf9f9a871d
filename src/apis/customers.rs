use crate::{
    apis::{Method, RazorpayClientInner},
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<RazorpayClientInner>,
}

impl CustomersApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new customer.
    #[tracing::instrument(name = "Create Customer", skip(self, data))]
    pub async fn create(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/customers", Some(data))
            .await
    }

    /// Gets the details of an existing customer.
    #[tracing::instrument(name = "Fetch Customer", skip(self, filters))]
    pub async fn fetch(&self, customer_id: &str, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/customers/{}", encode(customer_id)),
                filters,
            )
            .await
    }

    /// Updates an existing customer. This endpoint expects a full replacement
    /// and is served over PUT.
    #[tracing::instrument(name = "Update Customer", skip(self, data))]
    pub async fn edit(&self, customer_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Put,
                &format!("/v1/customers/{}", encode(customer_id)),
                Some(data),
            )
            .await
    }

    /// Lists all customers.
    #[tracing::instrument(name = "List Customers", skip(self, filters))]
    pub async fn all(&self, filters: Option<Value>) -> Result<Value, Error> {
        self.inner
            .execute(Method::Get, "/v1/customers", filters)
            .await
    }

    /// Adds a bank account to a customer.
    #[tracing::instrument(name = "Add Customer Bank Account", skip(self, data))]
    pub async fn add_bank_account(&self, customer_id: &str, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Post,
                &format!("/v1/customers/{}/bank_account", encode(customer_id)),
                Some(data),
            )
            .await
    }

    /// Deletes a bank account of a customer.
    #[tracing::instrument(name = "Delete Customer Bank Account", skip(self))]
    pub async fn delete_bank_account(
        &self,
        customer_id: &str,
        bank_account_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Delete,
                &format!(
                    "/v1/customers/{}/bank_account/{}",
                    encode(customer_id),
                    encode(bank_account_id)
                ),
                None,
            )
            .await
    }

    /// Requests an eligibility check for a customer.
    #[tracing::instrument(name = "Request Eligibility Check", skip(self, data))]
    pub async fn request_eligibility_check(&self, data: Value) -> Result<Value, Error> {
        self.inner
            .execute(Method::Post, "/v1/customers/eligibility", Some(data))
            .await
    }

    /// Gets the result of an eligibility check.
    #[tracing::instrument(name = "Fetch Eligibility", skip(self, filters))]
    pub async fn eligibility(
        &self,
        eligibility_id: &str,
        filters: Option<Value>,
    ) -> Result<Value, Error> {
        self.inner
            .execute(
                Method::Get,
                &format!("/v1/customers/eligibility/{}", encode(eligibility_id)),
                filters,
            )
            .await
    }
}

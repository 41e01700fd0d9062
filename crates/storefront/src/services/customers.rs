//! Customer registration.

use async_trait::async_trait;
use shopfront_core::{Customer, NewCustomer};

use super::{BackendClient, ServiceError};

/// Registers new customers.
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Register `customer`, returning the stored record with its assigned id.
    ///
    /// Called once per submission. Single-shot: the future resolves to one
    /// value and is never retried.
    async fn sign_up(&self, customer: &NewCustomer) -> Result<Customer, ServiceError>;
}

/// [`CustomersService`] backed by `POST {api}/customers`.
#[derive(Clone)]
pub struct HttpCustomersClient {
    backend: BackendClient,
}

impl HttpCustomersClient {
    #[must_use]
    pub const fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CustomersService for HttpCustomersClient {
    async fn sign_up(&self, customer: &NewCustomer) -> Result<Customer, ServiceError> {
        let created: Customer = self.backend.post_json("customers", customer).await?;
        tracing::info!(customer_id = %created.id, "Customer registered");
        Ok(created)
    }
}

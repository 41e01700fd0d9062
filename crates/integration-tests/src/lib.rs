//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! The tests drive the storefront router in process. The customers and
//! orders backend is replaced by the recording fakes in this crate, so no
//! server or network access is needed.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use shopfront_core::{Customer, CustomerId, NewCustomer, PendingOrder};
use shopfront_storefront::config::{
    BackendConfig, SentryConfig, SignUpConfig, StorefrontConfig,
};
use shopfront_storefront::routes;
use shopfront_storefront::services::{CustomersService, OrdersService, ServiceError};
use shopfront_storefront::state::AppState;

/// Customer id handed out by [`FakeCustomers`].
pub const REGISTERED_ID: &str = "5a1b2c3d4e5f6a7b8c9d0e1f";

/// Records every sign-up payload; rejects every call when `fail` is set.
#[derive(Debug, Default)]
pub struct FakeCustomers {
    pub calls: Mutex<Vec<NewCustomer>>,
    pub fail: bool,
}

impl FakeCustomers {
    /// A backend that rejects every registration.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Payloads received so far.
    pub fn calls(&self) -> Vec<NewCustomer> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CustomersService for FakeCustomers {
    async fn sign_up(&self, customer: &NewCustomer) -> Result<Customer, ServiceError> {
        self.calls.lock().unwrap().push(customer.clone());
        if self.fail {
            return Err(ServiceError::Api {
                status: 422,
                message: "email taken".to_string(),
            });
        }
        Ok(Customer {
            id: CustomerId::new(REGISTERED_ID),
            email: customer.email.clone(),
            name: customer.name.clone(),
            address: customer.address.clone(),
            mobile: customer.mobile.clone(),
            birth_date: customer.birth_date.clone(),
            gender: customer.gender.clone(),
        })
    }
}

/// Records every posted order with its customer id.
#[derive(Debug, Default)]
pub struct FakeOrders {
    pub calls: Mutex<Vec<(CustomerId, PendingOrder)>>,
}

impl FakeOrders {
    /// Orders posted so far.
    pub fn calls(&self) -> Vec<(CustomerId, PendingOrder)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrdersService for FakeOrders {
    async fn post_order(
        &self,
        customer_id: &CustomerId,
        order: &PendingOrder,
    ) -> Result<(), ServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((customer_id.clone(), order.clone()));
        Ok(())
    }
}

/// Configuration for an in-process storefront. The backend URL is never dialled.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 3000,
        base_url: "http://127.0.0.1:3000".to_string(),
        backend: BackendConfig {
            api_url: "http://127.0.0.1:9/".parse().unwrap(),
            api_token: None,
        },
        sign_up: SignUpConfig::default(),
        sentry: SentryConfig::default(),
    }
}

/// The full storefront router backed by the given fakes.
#[must_use]
pub fn test_app(customers: Arc<FakeCustomers>, orders: Arc<FakeOrders>) -> Router {
    routes::app(AppState::new(test_config(), customers, orders))
}

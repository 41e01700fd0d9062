//! Application state shared across handlers.

use std::sync::Arc;

use crate::components::SignUpServices;
use crate::config::StorefrontConfig;
use crate::navigation::Navigator;
use crate::services::{
    BackendClient, CustomersService, DateService, HttpCustomersClient, HttpOrdersClient,
    OrdersService, ServiceError,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the backend collaborators.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    dates: DateService,
    customers: Arc<dyn CustomersService>,
    orders: Arc<dyn OrdersService>,
}

impl AppState {
    /// Create application state talking to the configured backend over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, ServiceError> {
        let backend = BackendClient::new(&config.backend)?;
        let customers = Arc::new(HttpCustomersClient::new(backend.clone()));
        let orders = Arc::new(HttpOrdersClient::new(backend));
        Ok(Self::new(config, customers, orders))
    }

    /// Create application state with explicit collaborators.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        customers: Arc<dyn CustomersService>,
        orders: Arc<dyn OrdersService>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                dates: DateService::new(),
                customers,
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the date option provider.
    #[must_use]
    pub fn dates(&self) -> &DateService {
        &self.inner.dates
    }

    /// Collaborators for one sign-up, navigating through `navigator`.
    #[must_use]
    pub fn sign_up_services(&self, navigator: Arc<dyn Navigator>) -> SignUpServices {
        SignUpServices {
            customers: Arc::clone(&self.inner.customers),
            orders: Arc::clone(&self.inner.orders),
            navigator,
        }
    }
}

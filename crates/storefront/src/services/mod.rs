//! Collaborators of the sign-up component.
//!
//! # Services
//!
//! - [`dates`] - Day/month/year option lists and the calendar check
//! - [`customers`] - Customer registration
//! - [`orders`] - Attaching a pending guest order to a customer
//!
//! Registration and order attachment are traits so the component can run
//! against the HTTP backend in production and in-process fakes in tests.

pub mod backend;
pub mod customers;
pub mod dates;
mod error;
pub mod orders;

pub use backend::BackendClient;
pub use customers::{CustomersService, HttpCustomersClient};
pub use dates::{DateService, MonthOption};
pub use error::ServiceError;
pub use orders::{HttpOrdersClient, OrdersService};

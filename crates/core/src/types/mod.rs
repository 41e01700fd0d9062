//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod birth_date;
pub mod customer;
pub mod email;
pub mod id;
pub mod order;

pub use birth_date::{DateParts, is_valid_date};
pub use customer::{Customer, NewCustomer};
pub use email::{EmailError, is_valid_email, validate_email};
pub use id::*;
pub use order::{OrderLine, PendingOrder};

//! Shopfront Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! - customer drafts and registered customers
//! - pending guest orders
//! - birth-date parts and the calendar-validity check
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no session access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, email syntax, customer and order records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

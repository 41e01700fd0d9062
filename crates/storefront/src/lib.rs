//! Shopfront Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Layers
//!
//! - [`forms`] - Sign-up form model and the birth-date composer
//! - [`components`] - The sign-up component and its submission handler
//! - [`services`] - Date options plus the customers and orders backends
//! - [`routes`] - axum handlers and the askama sign-up page

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod state;

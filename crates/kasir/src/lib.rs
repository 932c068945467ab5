//! SI-ACIL Kasir library.
//!
//! This crate provides the cashier panel as a library, allowing the router
//! to be exercised by the integration tests.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - SI-ACIL backend API for stored invoices (read-only)
//!
//! The panel owns no persistence: invoices are fetched from the backend per
//! view activation, and the only mutable state is per-request.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod acil;
pub mod config;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;

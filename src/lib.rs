//! Userbox Server Library
//!
//! This library exposes server modules for integration testing.

pub mod config;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod logging;
pub mod models;
pub mod routes;
pub mod store;
pub mod validation;

//! HTTP request handlers
//!
//! This module provides HTTP handlers for the user REST API.

pub mod users;

pub use users::*;

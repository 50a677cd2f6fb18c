//! Integration test utilities for the reqres API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API over a private in-memory database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

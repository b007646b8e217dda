//! Integration test utilities for the roster API
//!
//! This crate provides helpers for running end-to-end tests against a
//! server bootstrapped on a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

//! Sandbox conformance test suite for the payment platform SNAP APIs.
//!
//! This library is the harness behind the suite's tests: a fixture-driven
//! assertion engine (load expected JSON, substitute runtime variables,
//! structurally compare against the live response) and a thin signed HTTP
//! client for the disbursement, payment-gateway, and widget API families.

pub mod client;
pub mod config;
pub mod core;
pub mod fixture;

// Re-export commonly used types
pub use client::{retry_on_inconsistent_request, SandboxClient};
pub use config::Config;
pub use core::{Error, Result};
pub use fixture::{
    apply_merchant_id, assert_fail_response, assert_response, compare, substitute, Difference,
    Fixture, ResponseBody, VariableMap, VALUE_FROM_SERVER,
};

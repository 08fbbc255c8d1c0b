//! Shared infrastructure for the closest-kitchen AWS Lambda function.
//!
//! This crate provides the pieces the handler wires together:
//!
//! - [`ApiGatewayEvent`] and [`FindKitchenRequest`]: inbound event and
//!   request body types with validation
//! - [`ApiGatewayResponse`]: the uniform response envelope, built from a
//!   tagged [`ResponseBody`]
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides event builders and upstream body
//! fixtures for handler testing. Enable the `test-utils` feature to access
//! it from dependent crates.

#![deny(warnings)]

mod requests;
mod response;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use requests::{ApiGatewayEvent, FindKitchenRequest, Validate, ValidationError};
pub use response::{ApiGatewayResponse, ResponseBody};
pub use tracing_init::init_tracing;

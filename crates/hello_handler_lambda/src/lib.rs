//! AWS Lambda adapters for the invocation handler.
//!
//! This crate owns host-runtime integration (context conversion, the Lambda
//! entry point, logging setup) and re-exports the handler contract through a
//! single runtime module boundary.

pub mod adapters;
pub mod handlers;
pub mod logging;
pub mod runtime;

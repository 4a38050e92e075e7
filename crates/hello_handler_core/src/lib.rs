//! Invocation handler domain primitives.
//!
//! This crate owns the event/context/response contract and the handler
//! itself. It excludes the Lambda runtime and tokio; those live in
//! `hello_handler_lambda`.

pub mod contract;
pub mod error;
pub mod handler;

pub use contract::{Event, InvocationContext, Response};
pub use error::HandlerError;
pub use handler::{HelloHandler, InvocationHandler};

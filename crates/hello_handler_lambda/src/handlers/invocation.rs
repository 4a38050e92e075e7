use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::error;

use crate::adapters::context::invocation_context_from_lambda;
use crate::runtime::contract::{Event, InvocationContext, Response};
use crate::runtime::handler::{HelloHandler, InvocationHandler};

/// Lambda entry point: runs [`HelloHandler`] on the raw payload, whatever its shape.
pub async fn handle_lambda_event(event: LambdaEvent<Value>) -> Result<Response, Error> {
    handle_lambda_event_with(&HelloHandler, event)
}

pub fn handle_lambda_event_with(
    handler: &impl InvocationHandler,
    event: LambdaEvent<Value>,
) -> Result<Response, Error> {
    let context = invocation_context_from_lambda(&event.context);
    let payload = Event::from_value(event.payload);

    handler.handle(&payload, &context).map_err(|failure| {
        error!(
            component = "lambda_adapter",
            request_id = context.request_id.as_deref().unwrap_or_default(),
            error_type = failure.error_type(),
            error = %failure,
            "invocation_failed"
        );
        Error::from(failure)
    })
}

/// Runs the handler against JSON documents instead of a live runtime.
///
/// A missing context document stands for an empty context.
pub fn invoke_from_documents(
    handler: &impl InvocationHandler,
    event_json: &str,
    context_json: Option<&str>,
) -> Result<Response, Error> {
    let payload: Value = serde_json::from_str(event_json)
        .map_err(|error| Error::from(format!("invalid event document: {error}")))?;
    let event = Event::from_value(payload);

    let context = match context_json {
        Some(text) => serde_json::from_str::<InvocationContext>(text)
            .map_err(|error| Error::from(format!("invalid context document: {error}")))?,
        None => InvocationContext::default(),
    };

    handler.handle(&event, &context).map_err(Error::from)
}

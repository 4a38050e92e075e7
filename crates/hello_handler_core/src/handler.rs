use tracing::{error, info};

use crate::contract::{
    Event, InvocationContext, Response, HELLO_MESSAGE, QUERY_PARAMS_ATTRIBUTE,
    SUCCESS_STATUS_CODE,
};
use crate::error::HandlerError;

const COMPONENT: &str = "invocation_handler";

/// Host invocation convention: one event and one context in, one response out.
pub trait InvocationHandler {
    fn handle(&self, event: &Event, context: &InvocationContext)
        -> Result<Response, HandlerError>;
}

/// Logs the invocation and answers with a fixed greeting.
///
/// Emits `event_received`, `context_received` and `query_params_read` in that
/// order. The query params are only logged, never interpreted. When the event
/// has no `query_params` (including any non-object payload) the third record is
/// replaced by an error-level `query_params_missing` and no response is built.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloHandler;

impl InvocationHandler for HelloHandler {
    fn handle(
        &self,
        event: &Event,
        context: &InvocationContext,
    ) -> Result<Response, HandlerError> {
        info!(component = COMPONENT, payload = %event, "event_received");
        info!(component = COMPONENT, payload = %context, "context_received");

        let Some(query_params) = event.query_params() else {
            error!(
                component = COMPONENT,
                attribute = QUERY_PARAMS_ATTRIBUTE,
                "query_params_missing"
            );
            return Err(HandlerError::missing_attribute(QUERY_PARAMS_ATTRIBUTE));
        };
        info!(component = COMPONENT, payload = %query_params, "query_params_read");

        Response::json(SUCCESS_STATUS_CODE, &HELLO_MESSAGE)
    }
}

use chrono::{DateTime, SecondsFormat, Utc};
use lambda_runtime::Context;
use serde_json::{Map, Value};

use crate::runtime::contract::InvocationContext;

/// Copies the Lambda invocation metadata into the handler's context record.
///
/// Empty strings and zero values mean the runtime did not supply the field and
/// are left out.
pub fn invocation_context_from_lambda(context: &Context) -> InvocationContext {
    let config = &context.env_config;

    let mut attributes = Map::new();
    if let Some(client_context) = context
        .client_context
        .as_ref()
        .and_then(|value| serde_json::to_value(value).ok())
    {
        attributes.insert("client_context".to_string(), client_context);
    }
    if let Some(identity) = context
        .identity
        .as_ref()
        .and_then(|value| serde_json::to_value(value).ok())
    {
        attributes.insert("identity".to_string(), identity);
    }

    InvocationContext {
        request_id: non_empty(&context.request_id),
        deadline_ms: (context.deadline > 0).then_some(context.deadline),
        deadline: deadline_rfc3339(context.deadline),
        invoked_function_arn: non_empty(&context.invoked_function_arn),
        xray_trace_id: context
            .xray_trace_id
            .as_deref()
            .and_then(non_empty),
        function_name: non_empty(&config.function_name),
        function_version: non_empty(&config.version),
        memory_limit_mb: (config.memory > 0).then_some(config.memory),
        log_group_name: non_empty(&config.log_group),
        log_stream_name: non_empty(&config.log_stream),
        attributes,
    }
}

fn deadline_rfc3339(deadline_ms: u64) -> Option<String> {
    if deadline_ms == 0 {
        return None;
    }
    let millis = i64::try_from(deadline_ms).ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|deadline| deadline.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lambda_runtime::Config;
    use serde_json::json;

    use super::*;

    fn sample_context() -> Context {
        let mut config = Config::default();
        config.function_name = "hello-handler".to_string();
        config.version = "$LATEST".to_string();
        config.memory = 128;
        config.log_group = "/aws/lambda/hello-handler".to_string();
        config.log_stream = "2026/10/16/[$LATEST]abc".to_string();

        let mut context = Context::default();
        context.request_id = "req-123".to_string();
        context.deadline = 1_700_000_000_000;
        context.invoked_function_arn =
            "arn:aws:lambda:eu-west-1:123456789012:function:hello-handler".to_string();
        context.xray_trace_id = Some("Root=1-abc".to_string());
        context.env_config = Arc::new(config);
        context
    }

    #[test]
    fn copies_invocation_metadata() {
        let converted = invocation_context_from_lambda(&sample_context());

        assert_eq!(converted.request_id.as_deref(), Some("req-123"));
        assert_eq!(converted.deadline_ms, Some(1_700_000_000_000));
        assert_eq!(
            converted.deadline.as_deref(),
            Some("2023-11-14T22:13:20.000Z")
        );
        assert_eq!(
            converted.invoked_function_arn.as_deref(),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:hello-handler")
        );
        assert_eq!(converted.xray_trace_id.as_deref(), Some("Root=1-abc"));
        assert_eq!(converted.function_name.as_deref(), Some("hello-handler"));
        assert_eq!(converted.function_version.as_deref(), Some("$LATEST"));
        assert_eq!(converted.memory_limit_mb, Some(128));
        assert_eq!(
            converted.log_group_name.as_deref(),
            Some("/aws/lambda/hello-handler")
        );
        assert!(converted.attributes.is_empty());
    }

    #[test]
    fn default_context_converts_to_empty_record() {
        let converted = invocation_context_from_lambda(&Context::default());

        assert_eq!(converted, InvocationContext::default());
        assert_eq!(
            serde_json::to_value(&converted).expect("context should serialize"),
            json!({})
        );
    }
}

use hello_handler_lambda::handlers::invocation::handle_lambda_event;
use hello_handler_lambda::logging::LoggingConfig;
use lambda_runtime::{service_fn, Error};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let logging = LoggingConfig::from_env();
    logging.init()?;
    info!(
        component = "bootstrap",
        log_filter = %logging.filter,
        "runtime_starting"
    );

    lambda_runtime::run(service_fn(handle_lambda_event)).await
}

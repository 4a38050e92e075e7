use std::path::PathBuf;

use clap::Parser;
use hello_handler_lambda::adapters::documents::read_local_documents;
use hello_handler_lambda::handlers::invocation::invoke_from_documents;
use hello_handler_lambda::logging::LoggingConfig;
use hello_handler_lambda::runtime::handler::HelloHandler;
use lambda_runtime::Error;

#[derive(Parser)]
#[command(
    name = "invoke_local",
    about = "Run the handler once against local JSON documents",
    long_about = "Reads an event document (from --event or stdin) and an optional\n\
                  context document, runs the handler, and prints the response."
)]
struct Cli {
    /// Event JSON file; stdin when omitted
    #[arg(long)]
    event: Option<PathBuf>,
    /// Context JSON file; empty context when omitted
    #[arg(long)]
    context: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    LoggingConfig::from_env().init()?;

    let documents = read_local_documents(
        cli.event.as_deref(),
        cli.context.as_deref(),
        std::io::stdin().lock(),
    )?;
    let response = invoke_from_documents(
        &HelloHandler,
        &documents.event_json,
        documents.context_json.as_deref(),
    )?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

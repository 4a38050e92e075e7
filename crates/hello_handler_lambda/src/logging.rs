use lambda_runtime::Error;
use tracing_subscriber::EnvFilter;

pub const RUST_LOG_ENV: &str = "RUST_LOG";
pub const LOG_LEVEL_ENV: &str = "AWS_LAMBDA_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "AWS_LAMBDA_LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Unrecognised values fall back to text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `RUST_LOG` directives win over the Lambda-managed log level.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = non_blank(lookup(RUST_LOG_ENV))
            .or_else(|| non_blank(lookup(LOG_LEVEL_ENV)).map(|level| level.to_ascii_lowercase()))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let format = non_blank(lookup(LOG_FORMAT_ENV))
            .map(|raw| LogFormat::parse(&raw))
            .unwrap_or_default();

        Self { filter, format }
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }

    /// Installs the global subscriber. Output goes to stderr without
    /// timestamps; CloudWatch adds the ingestion time.
    pub fn init(&self) -> Result<(), Error> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time();

        match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Text => builder.try_init(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

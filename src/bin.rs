//! Binary entry point for `incident-bot`.
//!
//! This module provides the command-line interface for incident-bot with options
//! for configuration file paths and logging verbosity. It initializes the
//! necessary components and starts the service.

use clap::Parser;
use incident_bot::base::{
    config::Config,
    types::{ChatbotVariant, Void},
};
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Incident-bot – a keyword-driven security and medical incident chatbot.
///
/// Configuration can come from `config.toml` or `INCIDENT_BOT_*` environment
/// variables, with `--bind` and `--variant` taking precedence. The bot answers
/// `POST /chatbot` with a canned response for the first recognized trigger
/// phrase, and can report security incidents by email.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the bot will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Override the address to listen on (e.g. `127.0.0.1:8000`).
    #[arg(short, long)]
    bind: Option<String>,
    /// Override which handler answers `POST /chatbot`.
    ///
    /// `classifier` answers from the response table with no side effects;
    /// `incident-report` looks up rooms and emails security about incidents.
    #[arg(long, value_enum)]
    variant: Option<ChatbotVariant>,
}

/// Main entry point for the incident-bot binary.
///
/// Sets up logging based on verbosity, loads configuration, and starts the bot.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    // Prepare the otlp layer, only when a collector is configured.

    let otel = if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some() {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("incident-bot");
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    let config = Config::load(args.config.as_deref())?.with_overrides(args.bind, args.variant)?;

    info!(variant = ?config.chatbot_variant, max_query_length = config.max_query_length, "Configuration loaded.");

    incident_bot::start(config).await
}

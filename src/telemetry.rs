use std::io::IsTerminal;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event
    #[default]
    Text,
    /// Bunyan-style JSON lines
    Json,
}

/// Both formats write to stderr; `RUST_LOG` wins over `env_filter`.
pub fn get_subscriber(
    name: String,
    env_filter: String,
    format: LogFormat,
) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    let json = format == LogFormat::Json;
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
    });
    let bunyan_layer = json.then(|| BunyanFormattingLayer::new(name, std::io::stderr));

    Registry::default()
        .with(env_filter)
        .with(json.then_some(JsonStorageLayer))
        .with(bunyan_layer)
        .with(text_layer)
}

pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    // route `log` records from sqlx into tracing
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

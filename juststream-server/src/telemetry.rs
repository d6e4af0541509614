use anyhow::Context;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a bunyan JSON subscriber on stdout. `RUST_LOG` takes precedence over `debug`.
pub fn init_subscriber(name: &str, debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name.to_string(), std::io::stdout))
        .try_init()
        .context("Installing the tracing subscriber")
}

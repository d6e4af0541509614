use std::{net::TcpListener, path::PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Path to the JustStream server configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn default_config_path() -> PathBuf {
    "/etc/juststream/config.toml".into()
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config =
        juststream_server::cfg::get_config(&args.config.unwrap_or_else(default_config_path))?;
    juststream_server::telemetry::init_subscriber("juststream-server", config.debug)?;

    let listener = TcpListener::bind(format!(
        "{}:{}",
        config.http_config.listen_address, config.http_config.listen_port
    ))?;
    tracing::info!(address = %listener.local_addr()?, "Listening");
    juststream_server::run_app(listener)?.await?;

    Ok(())
}

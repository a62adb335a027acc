use std::net::SocketAddr;

use anyhow::Context as _;
use clap::Parser;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "stillcast", version, about = "Serve still-image to MP4 conversion over HTTP")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// TCP port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Maximum accepted upload size in MiB.
    #[arg(long, default_value_t = 32)]
    max_upload_mib: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if !stillcast::is_ffmpeg_on_path() {
        warn!("ffmpeg was not found on PATH; /convert requests will fail at the encode phase");
    }

    let app = stillcast::server::router(cli.max_upload_mib * 1024 * 1024);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", cli.host, cli.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("stillcast listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use transcript_digest::{create_router, AppState, Config};

#[derive(Debug, Parser)]
#[command(name = "transcript-digest", about = "Time-windowed video transcript summaries")]
struct Args {
    /// Config file (extension optional)
    #[arg(short, long, default_value = "config/transcript-digest")]
    config: String,

    /// Override the HTTP port from the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut cfg = Config::load(&args.config)?;
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("Transcript Digest v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);
    info!("Generation backend: {} (default model {})", cfg.generation.base_url, cfg.generation.default_model);
    info!("Transcripts directory: {}", cfg.transcripts.dir);

    tokio::fs::create_dir_all(&cfg.transcripts.dir)
        .await
        .with_context(|| format!("Failed to create transcripts directory {}", cfg.transcripts.dir))?;

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let state = AppState::from_config(cfg)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

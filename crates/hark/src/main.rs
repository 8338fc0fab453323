//! hark: speech-to-text HTTP service.
//!
//! Bootstrap order matters: settings first (the log directive lives
//! there), then tracing, then the fail-fast model check. No request can
//! succeed without the model, so a missing one terminates the process
//! before the listener ever opens.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hark_server::AppState;
use hark_transcription::{SpeechEngine, StubEngine, load_engine, model};

/// Command-line options. Everything here can also come from the
/// settings file or environment; flags win.
#[derive(Parser)]
#[command(name = "hark", version, about = "Speech-to-text HTTP service")]
struct Cli {
    /// Path to a settings file (camelCase JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listening port (overrides settings and PORT).
    #[arg(long)]
    port: Option<u16>,

    /// Serve with the deterministic stub engine instead of Vosk.
    /// Transcripts are placeholders; useful for smoke tests and builds
    /// without the `vosk` feature.
    #[arg(long)]
    stub_engine: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = hark_settings::load_settings(cli.config.as_deref())
        .context("failed to load settings")?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    init_tracing(&settings.logging.directive);

    let engine = build_engine(&cli, &settings);

    std::fs::create_dir_all(&settings.transcode.uploads_dir).with_context(|| {
        format!(
            "failed to create uploads directory {}",
            settings.transcode.uploads_dir.display()
        )
    })?;

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let state = AppState::new(engine, Arc::new(settings));
    let app = hark_server::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;
    info!(addr = %local, "hark listening");
    info!("upload with: curl -X POST http://localhost:{}/transcribe -F \"audio=@clip.wav\"", local.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down cleanly");
    Ok(())
}

/// Load the recognition model exactly once; it is shared read-only by
/// every request for the life of the process.
///
/// Startup errors are fatal by design: there is no degraded mode.
fn build_engine(cli: &Cli, settings: &hark_settings::Settings) -> Arc<dyn SpeechEngine> {
    let model_dir = &settings.model.dir;
    let sample_rate = settings.model.sample_rate;

    if cli.stub_engine {
        warn!("running with the stub engine; transcripts are placeholders");
        return Arc::new(StubEngine::new(model::model_name(model_dir), sample_rate));
    }

    if !model::is_model_present(model_dir) {
        error!(path = %model_dir.display(), "recognition model not found, check the model directory");
        std::process::exit(1);
    }

    info!(path = %model_dir.display(), "loading recognition model, this can take a moment");
    match load_engine(model_dir, sample_rate) {
        Ok(engine) => {
            info!(model = engine.model_name(), sample_rate, "recognition model ready");
            engine
        }
        Err(e) => {
            error!(error = %e, "failed to load recognition model");
            std::process::exit(1);
        }
    }
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolve on ctrl-c or SIGTERM so in-flight requests can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                let _ = stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("ctrl-c received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
    }
}

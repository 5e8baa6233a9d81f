//! Server binary for `taskboard`.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use taskboard::tasks::{seed_tasks, TaskStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Single-process task tracker with a JSON HTTP API and a static web UI.
#[derive(Debug, Parser)]
#[command(name = "taskboard", version)]
struct Args {
    /// Address to bind.
    #[arg(long, env = "TASKBOARD_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "TASKBOARD_PORT", default_value_t = 8000)]
    port: u16,

    /// Directory served under /static.
    #[arg(long, env = "TASKBOARD_STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let store = Arc::new(TaskStore::with_tasks(seed_tasks()));

    match taskboard::http::serve(&args.host, args.port, store, args.static_dir).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

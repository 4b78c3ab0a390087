//! Diary web server.
//!
//! Default: http://127.0.0.1:8080/

use anyhow::{Context, Result};
use diary_core::{Config, Diary};
use diary_web::{AppState, Cli, build_router};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("diary: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::new();
    let config = cli.apply(Config::load()?);

    if cli.path {
        println!("{}", config.data_file.display());
        return Ok(());
    }

    let diary = Diary::with_config(config).context("opening diary file")?;
    let bind = diary.config.bind.clone();
    log::info!("Using diary file {}", diary.config.data_file.display());

    let app = build_router(Arc::new(AppState { diary }));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    log::info!("Diary listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

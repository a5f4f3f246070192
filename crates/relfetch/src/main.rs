use std::process::ExitCode;
use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use relfetch::config::{Cli, Settings};
use relfetch::ui::ProgressReporter;
use relfetch::Pipeline;
use relfetch_cache::CacheStore;
use relfetch_fetch::{FetchOptions, ReqwestClient};
use relfetch_platform::PlatformDescriptor;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let settings = Settings::from(Cli::parse());

    let platform = PlatformDescriptor::detect();

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(install(settings, platform))
}

async fn install(settings: Settings, platform: PlatformDescriptor) -> anyhow::Result<()> {
    let client = ReqwestClient::new(settings.timeouts)
        .map_err(|e| anyhow!("failed to build HTTP client: {e}"))?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let pipeline = Pipeline::new(
        Arc::new(client),
        settings.endpoint,
        CacheStore::new(settings.cache_dir),
    )
    .with_fetch_options(FetchOptions::default().cancel_token(cancel));

    let mut reporter = ProgressReporter::new();
    let artifact = pipeline
        .obtain_artifact(&platform, |progress| reporter.report(progress))
        .await?;

    if let Some(output) = settings.output {
        tokio::fs::copy(&artifact.path, &output)
            .await
            .map_err(|e| anyhow!("failed to copy installer to {}: {e}", output.display()))?;
        info!("Copied installer to {}", output.display());
    }

    println!("{}", artifact.path.display());
    Ok(())
}

//! Submission entrypoint: score the platform's input stream once and exit.

use mimalloc::MiMalloc;

use sts_eval::{Config, Harness};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        scorer = %config.scorer,
        stream_directory = ?config.stream_directory,
        "sts-eval starting"
    );

    let harness = Harness::from_config(&config)?;
    let summary = harness.run()?;

    tracing::info!(
        rows = summary.rows,
        predictions = summary.predictions,
        "sts-eval finished"
    );
    Ok(())
}

//! Prints the configured scorer's predictions for the built-in sample table.

use sts_eval::Config;
use sts_eval::preview::{render_preview, sample_table};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let scorer = config.scorer.build(&config)?;
    print!("{}", render_preview(scorer.as_ref(), &sample_table())?);
    Ok(())
}

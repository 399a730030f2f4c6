use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duotone::cli::{theme_table, Cli};
use duotone::config::Settings;
use duotone::params::PipelineParams;
use duotone::pipeline;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duotone=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if cli.list_themes {
        print!("{}", theme_table());
        return Ok(());
    }

    let settings = Settings::resolve(cli.config.as_deref())?;
    let params = PipelineParams::resolve(&cli, &settings)?;
    let output = pipeline::run(&params)?;
    println!("Generated: {}", output.display());

    Ok(())
}

mod config;
mod convert;
mod error;
mod prompt;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use convert::{ConversionResult, ConversionService};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting meta-i18n");

    let config = Config::from_env()?;
    info!(
        meta_path = %config.meta_path().display(),
        output_path = %config.output_path().display(),
        "configuration loaded"
    );

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();
    match ConversionService::new(config).run(&mut input, &mut output)? {
        ConversionResult::Converted { rules, issues } => info!(rules, issues, "conversion finished"),
        ConversionResult::Aborted { issues } => info!(issues, "conversion aborted"),
    }
    Ok(())
}

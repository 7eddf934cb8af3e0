mod config;
mod error;
mod sync;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use sync::SyncService;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting rules-sync");

    let config = Config::from_env()?;
    info!(
        rules_dir = %config.rules_dir.display(),
        meta_path = %config.meta_path.display(),
        "configuration loaded"
    );

    let meta_path = config.meta_path.clone();
    let today = chrono::Local::now().date_naive();
    let result = SyncService::new(config).run(today)?;

    println!("Found {} new rules", result.added);
    println!("Total rules: {}", result.total);
    println!("Updated {}", meta_path.display());
    Ok(())
}

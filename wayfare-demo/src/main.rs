use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayfare_demo::{app_config::Config, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfare_demo=info,wayfare_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    tracing::info!("Loaded config for package {}", config.package.name);

    let stdout = std::io::stdout();
    let quotes = run(&config, &mut stdout.lock())?;
    tracing::info!("Printed {} quotes", quotes.len());

    Ok(())
}

use clap::Parser;
use solid_kata::utils::{logger, validation::Validate};
use solid_kata::{CliConfig, Showcase};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting solid-kata");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut showcase = Showcase::new(stdout.lock(), config);

    match showcase.run() {
        Ok(()) => {
            tracing::info!("Showcase completed");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Showcase failed: {}", e);
            Err(e.into())
        }
    }
}

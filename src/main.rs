use anyhow::Context;
use clap::Parser;
use hello_greeter::utils::logger;
use hello_greeter::{CliConfig, GreetEngine, GreeterError};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    if let Some(path) = &config.config {
        tracing::debug!("Loaded config from {}", path);
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = run(&settings) {
        tracing::error!("Greeting failed: {:#}", e);
        match e.downcast_ref::<GreeterError>() {
            Some(inner) => eprintln!("{}", inner.user_friendly_message()),
            None => eprintln!("{:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(settings: &hello_greeter::Settings) -> anyhow::Result<()> {
    let engine = GreetEngine::new(settings);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    engine
        .run(&mut handle)
        .context("failed to write greeting to stdout")?;
    Ok(())
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "hello_greeter=warn";
pub const VERBOSE_FILTER: &str = "hello_greeter=debug,info";

/// Picks the filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool, configured: Option<&str>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    match configured {
        Some(level) if !level.trim().is_empty() => format!("hello_greeter={}", level.trim()),
        _ => DEFAULT_FILTER.to_string(),
    }
}

// stdout carries the greeting only, so logs go to stderr.
pub fn init_cli_logger(verbose: bool, configured: Option<&str>) {
    let directive = default_directive(verbose, configured);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

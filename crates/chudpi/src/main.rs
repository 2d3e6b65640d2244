//! chudpi: decimal digits of pi via the Chudnovsky series.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use chudpi_cli::ui;
use chudpi_lib::{app, config, errors};

fn main() {
    // Initialize tracing; logs go to stderr so stdout carries only the digits
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code_for(&err));
    }
}

//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use chudpi_cli::output::write_to_file;
use chudpi_cli::presenter::CLIResultPresenter;
use chudpi_cli::progress::CLIProgressReporter;
use chudpi_cli::ui;
use chudpi_core::calculator::ChudnovskyCalculator;
use chudpi_core::observer::{LoggingObserver, ProgressObserver};
use chudpi_orchestration::interfaces::ResultPresenter;
use chudpi_orchestration::orchestrator::{
    analyze_comparison_results, execute_calculation, execute_cross_check,
};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        chudpi_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.to_options();
    let calc = ChudnovskyCalculator::new();
    let presenter = CLIResultPresenter::new(config.quiet, config.stats);

    let observer: Box<dyn ProgressObserver> = if config.progress {
        Box::new(CLIProgressReporter::new())
    } else {
        Box::new(LoggingObserver::new())
    };

    let results = if config.verify {
        if opts.threads <= 1 {
            ui::print_warning("--verify with a single thread has nothing to compare");
        }
        execute_cross_check(&calc, &opts, observer.as_ref())
    } else {
        vec![execute_calculation(&calc, &opts, observer.as_ref())]
    };

    if results.len() > 1 {
        presenter.present_comparison(&results);
        analyze_comparison_results(&results).context("cross-check failed")?;
    }

    // The first entry is always the requested configuration.
    let primary = &results[0];
    let value = match &primary.outcome {
        Ok(value) => value,
        Err(e) => return Err(e.clone()).context("pi calculation failed"),
    };

    presenter.present_result(primary);
    info!(
        decimals = primary.decimals,
        threads = primary.threads,
        duration = ?primary.duration,
        "Pi computed"
    );

    if let Some(ref path) = config.output {
        write_to_file(path, value).with_context(|| format!("failed to write {path}"))?;
    }

    Ok(())
}

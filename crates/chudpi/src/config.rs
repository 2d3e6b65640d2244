//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use chudpi_core::options::{clamp_threads, FoldStrategy, Options};

/// chudpi: decimal digits of pi via the Chudnovsky series.
#[derive(Parser, Debug)]
#[command(name = "chudpi", version, about)]
pub struct AppConfig {
    /// Number of decimals to compute.
    #[arg(short, long, default_value_t = 1000, env = "CHUDPI_DECIMALS")]
    pub decimals: usize,

    /// Number of worker threads (values below 1 are raised to 1).
    #[arg(
        short,
        long,
        default_value_t = 1,
        allow_negative_numbers = true,
        env = "CHUDPI_THREADS"
    )]
    pub threads: i64,

    /// Print run statistics on stderr.
    #[arg(short, long)]
    pub stats: bool,

    /// Quiet mode (do not print pi).
    #[arg(short, long)]
    pub quiet: bool,

    /// Cross-check the result against a single-thread run.
    #[arg(long)]
    pub verify: bool,

    /// How worker results are merged.
    #[arg(long, value_enum, default_value_t = FoldArg::Sequential)]
    pub fold: FoldArg,

    /// Show a worker progress bar on stderr.
    #[arg(long)]
    pub progress: bool,

    /// Also write pi to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// CLI spelling of [`FoldStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FoldArg {
    /// Left-to-right accumulation.
    Sequential,
    /// Order-preserving pairwise tree.
    Pairwise,
}

impl From<FoldArg> for FoldStrategy {
    fn from(arg: FoldArg) -> Self {
        match arg {
            FoldArg::Sequential => FoldStrategy::Sequential,
            FoldArg::Pairwise => FoldStrategy::Pairwise,
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build calculation options, clamping the thread count.
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            decimals: self.decimals,
            threads: clamp_threads(self.threads),
            fold: self.fold.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("chudpi").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.decimals, 1000);
        assert_eq!(config.threads, 1);
        assert!(!config.stats);
        assert!(!config.quiet);
        assert_eq!(config.fold, FoldArg::Sequential);
    }

    #[test]
    fn short_flags() {
        let config = parse(&["-d", "5000", "-t", "4", "-s", "-q"]);
        assert_eq!(config.decimals, 5000);
        assert_eq!(config.threads, 4);
        assert!(config.stats);
        assert!(config.quiet);
    }

    #[test]
    fn negative_threads_are_clamped() {
        let config = parse(&["-t", "-3"]);
        assert_eq!(config.threads, -3);
        assert_eq!(config.to_options().threads, 1);
    }

    #[test]
    fn zero_threads_are_clamped() {
        let config = parse(&["--threads", "0"]);
        assert_eq!(config.to_options().threads, 1);
    }

    #[test]
    fn fold_option() {
        let config = parse(&["--fold", "pairwise"]);
        assert_eq!(config.to_options().fold, FoldStrategy::Pairwise);
    }

    #[test]
    fn negative_decimals_rejected() {
        let result = AppConfig::try_parse_from(["chudpi", "-d", "-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_is_consistent() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }
}

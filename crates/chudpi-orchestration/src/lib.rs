//! # chudpi-orchestration
//!
//! Timed execution, single-thread cross-checks, and result analysis.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculation, execute_cross_check};

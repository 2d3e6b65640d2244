//! chudpi library: application logic for the pi calculator.

pub mod app;
pub mod config;
pub mod errors;

//! Error handling and exit codes.

use chudpi_core::calculator::PiError;
use chudpi_core::constants::exit_codes;

/// Map a calculation error to its exit code.
#[must_use]
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::Calculation(_) => exit_codes::ERROR_GENERIC,
        PiError::Config(_) => exit_codes::ERROR_CONFIG,
        PiError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error, looking for a [`PiError`] in the chain.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<PiError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

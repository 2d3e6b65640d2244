//! Chudnovsky series constants and run defaults.

/// Linear term constant `A` in `A + B*k`.
pub const CHUDNOVSKY_A: u64 = 13_591_409;

/// Linear term coefficient `B` in `A + B*k`.
pub const CHUDNOVSKY_B: u64 = 545_140_134;

/// `C` in `C^3 * k^3 / 24`.
pub const CHUDNOVSKY_C: u64 = 640_320;

/// Exact divisor applied to `C^3 * k^3`.
pub const Q_DIVISOR: u64 = 24;

/// Multiplier in `pi = 426880 * sqrt(10005) * Q / T`.
pub const SQRT_MULTIPLIER: u64 = 426_880;

/// Radicand in `pi = 426880 * sqrt(10005) * Q / T`.
pub const SQRT_RADICAND: u64 = 10_005;

/// Decimal digits gained per series term (about 14.18, rounded down).
pub const DIGITS_PER_TERM: u64 = 14;

/// Extra series terms on top of `decimals / DIGITS_PER_TERM`.
pub const TERM_SAFETY_MARGIN: u64 = 10;

/// Working bits per requested decimal digit (log2(10) ~ 3.32).
pub const BITS_PER_DIGIT: usize = 4;

/// Guard digits added before converting to working bits.
pub const GUARD_DIGITS: usize = 100;

/// Default number of decimals when none is requested.
pub const DEFAULT_DECIMALS: usize = 1000;

/// Default number of worker threads.
pub const DEFAULT_THREADS: usize = 1;

/// Lowest accepted worker count; smaller requests are clamped up.
pub const MIN_THREADS: usize = 1;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Cross-checked runs produced different digits.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

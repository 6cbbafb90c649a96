//! Error types for parameter generation.

use thiserror::Error;

/// Errors that can occur while generating primes or group parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The requested prime bit length is below the minimum of 2 bits.
    #[error("prime bit length must be at least 2, got {0}")]
    BitLengthTooSmall(u64),

    /// A retry loop hit its attempt cap without finding a suitable value.
    ///
    /// The caps are sized so that this is never reached for honest inputs;
    /// hitting it indicates a broken random source or absurd parameters.
    #[error("gave up after {0} attempts without finding a suitable value")]
    AttemptsExhausted(usize),

    /// `q` does not divide `p - 1`, so `Z_p*` has no subgroup of order `q`.
    #[error("q does not divide p - 1; no order-q subgroup exists")]
    InvalidPair,
}

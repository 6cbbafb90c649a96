//! Error types for the ElGamal signature scheme.

use thiserror::Error;

/// Errors that can occur during signing.
///
/// Verification never errors: malformed or out-of-range signatures simply
/// verify `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ElGamalError {
    /// Signing hit its redraw cap without producing a nonzero response.
    ///
    /// Each redraw beyond the first requires the response scalar to come
    /// out zero, a probability-`1/q` event, so reaching the cap indicates
    /// a broken random source rather than bad luck.
    #[error("exhausted {0} signing attempts without a usable ephemeral exponent")]
    NonceRetriesExhausted(usize),
}

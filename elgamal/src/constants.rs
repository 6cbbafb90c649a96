//! Constants used in the ElGamal signature scheme implementation.

/// Width of the message digest in bytes.
///
/// Messages are hashed with SHA-256, so the integer digest is at most
/// 256 bits before reduction modulo `q`.
pub const DIGEST_BYTES: usize = 32;

/// Minimum subgroup order bit length for real use.
///
/// Orders below this are fine for tests and demonstrations but give no
/// meaningful security margin; the demo binary emits an advisory rather
/// than refusing them.
pub const MIN_SECURE_Q_BITS: u64 = 128;

/// Bit length above which parameter generation becomes noticeably slow.
pub const MAX_PRACTICAL_Q_BITS: u64 = 1024;

/// Redraw cap for the ephemeral exponent during signing.
///
/// A redraw happens only when the response scalar comes out zero, which
/// occurs with probability `1/q` per draw.
pub(crate) const MAX_SIGN_ATTEMPTS: usize = 64;

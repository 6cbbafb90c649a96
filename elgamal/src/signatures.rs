//! Signature type and message digest mapping.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An ElGamal signature consisting of a commitment and a response.
///
/// The signature is a pair `(r, s)` where:
/// - `r = g^k mod p` commits to the ephemeral exponent `k` and lives in
///   the full group, `0 < r < p`
/// - `s = k^-1 (H(m) - x r) mod q` lives in the exponent ring, `0 < s < q`
///
/// # Structure
///
/// The signature satisfies the verification equation
/// `y^r * r^s ≡ g^H(m) (mod p)`, with the digest reduced modulo `q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Commitment to the ephemeral exponent, `g^k mod p`.
    pub r: BigUint,
    /// Response scalar, `k^-1 (H(m) - x r) mod q`.
    pub s: BigUint,
}

/// Maps a message to its integer digest.
///
/// The SHA-256 digest of the message is interpreted as a big-endian
/// unsigned integer. Deterministic and total; callers reduce the result
/// modulo `q` before it enters the signing or verification arithmetic.
pub fn hash_to_int(msg: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(msg))
}

/// Digest reduced into the exponent ring `Z_q`.
pub(crate) fn message_representative(msg: &[u8], q: &BigUint) -> BigUint {
    hash_to_int(msg) % q
}

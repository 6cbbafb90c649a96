//! Random prime and safe-prime-pair generation.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::GroupError;
use crate::primality::{is_prime, DEFAULT_ROUNDS};

/// Attempt cap applied to every generation retry loop.
///
/// Expected iteration counts are in the tens to low hundreds even at
/// 1024-bit sizes, so the cap only trips on a broken random source.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Tuning knobs for the generation retry loops.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Miller-Rabin rounds per primality decision (error at most `4^-rounds`).
    pub rounds: usize,
    /// Attempt cap for each retry loop.
    pub max_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Draws a random odd candidate of exactly `bits` bits: the top bit is
/// forced so the bit length is exact, the bottom bit so the candidate is odd.
fn prime_candidate<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    let mut candidate = rng.gen_biguint(bits);
    candidate |= BigUint::one() << (bits - 1);
    candidate |= BigUint::one();
    candidate
}

/// Generates a random probable prime of exactly `bits` bits.
///
/// By the prime number theorem the expected number of candidates is about
/// `bits * ln(2) / 2`, since only odd candidates are tested.
pub fn generate_prime<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> Result<BigUint, GroupError> {
    generate_prime_with(rng, bits, &GenConfig::default())
}

/// As [`generate_prime`], with explicit loop configuration.
pub fn generate_prime_with<R: Rng + ?Sized>(
    rng: &mut R,
    bits: u64,
    config: &GenConfig,
) -> Result<BigUint, GroupError> {
    if bits < 2 {
        return Err(GroupError::BitLengthTooSmall(bits));
    }
    for attempt in 1..=config.max_attempts {
        let candidate = prime_candidate(rng, bits);
        if is_prime(rng, &candidate, config.rounds) {
            debug!(bits, attempt, "generated probable prime");
            return Ok(candidate);
        }
    }
    Err(GroupError::AttemptsExhausted(config.max_attempts))
}

/// Generates a Sophie-Germain prime `q` of `q_bits` bits together with the
/// safe prime `p = 2q + 1`, returned as `(p, q)`.
///
/// Both values are primality-tested: `q` by construction and `p` with a
/// fresh run of the tester on each candidate pair.
pub fn generate_safe_prime_pair<R: Rng + ?Sized>(
    rng: &mut R,
    q_bits: u64,
) -> Result<(BigUint, BigUint), GroupError> {
    generate_safe_prime_pair_with(rng, q_bits, &GenConfig::default())
}

/// As [`generate_safe_prime_pair`], with explicit loop configuration.
pub fn generate_safe_prime_pair_with<R: Rng + ?Sized>(
    rng: &mut R,
    q_bits: u64,
    config: &GenConfig,
) -> Result<(BigUint, BigUint), GroupError> {
    for attempt in 1..=config.max_attempts {
        let q = generate_prime_with(rng, q_bits, config)?;
        let p = &q * 2u32 + 1u32;
        if is_prime(rng, &p, config.rounds) {
            debug!(q_bits, attempt, "found safe prime pair");
            return Ok((p, q));
        }
    }
    Err(GroupError::AttemptsExhausted(config.max_attempts))
}

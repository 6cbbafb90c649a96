//! Domain parameters for the order-`q` subgroup.

use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GroupError;
use crate::generator::find_generator;
use crate::primality::is_prime;
use crate::primes::{generate_safe_prime_pair_with, GenConfig};

/// Domain parameters `(p, q, g)` for the order-`q` subgroup of `Z_p*`.
///
/// Invariants established by [`GroupParams::generate`]: `p = 2q + 1` with
/// both `p` and `q` prime, `1 < g < p`, and `g` of multiplicative order
/// exactly `q` modulo `p`. The struct is plain data, immutable after
/// generation, and shared read-only between key generation, signing and
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParams {
    /// Safe prime modulus.
    pub p: BigUint,
    /// Prime order of the subgroup; `p = 2q + 1`.
    pub q: BigUint,
    /// Generator of the order-`q` subgroup.
    pub g: BigUint,
}

impl GroupParams {
    /// Runs the full generation pipeline with the default loop configuration.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, q_bits: u64) -> Result<Self, GroupError> {
        Self::generate_with(rng, q_bits, &GenConfig::default())
    }

    /// Runs the full generation pipeline: safe-prime pair, then generator.
    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        q_bits: u64,
        config: &GenConfig,
    ) -> Result<Self, GroupError> {
        let (p, q) = generate_safe_prime_pair_with(rng, q_bits, config)?;
        let g = find_generator(rng, &p, &q)?;
        Ok(Self { p, q, g })
    }

    /// Re-checks every invariant: the safe-prime relation, primality of
    /// both `p` and `q`, the range of `g`, and `g^q ≡ 1 (mod p)`.
    pub fn validate<R: Rng + ?Sized>(&self, rng: &mut R, rounds: usize) -> bool {
        self.p == &self.q * 2u32 + 1u32
            && is_prime(rng, &self.q, rounds)
            && is_prime(rng, &self.p, rounds)
            && self.g > BigUint::one()
            && self.g < self.p
            && self.g.modpow(&self.q, &self.p).is_one()
    }
}

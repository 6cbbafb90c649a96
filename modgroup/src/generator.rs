//! Search for a generator of the order-`q` subgroup of `Z_p*`.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;
use tracing::debug;

use crate::errors::GroupError;
use crate::primes::DEFAULT_MAX_ATTEMPTS;

/// Finds a generator `g` of the order-`q` subgroup of `Z_p*`.
///
/// Draws `h` uniformly from `[2, p-2]` and cofactor-exponentiates:
/// `g = h^((p-1)/q) mod p`. Any such `g` has order dividing `q`; since `q`
/// is prime, rejecting the identity leaves exactly the order-`q` elements.
/// A redraw is needed only when `h` lands in the kernel of the cofactor
/// map, which happens with probability about `1/q`.
///
/// Returns [`GroupError::InvalidPair`] when `q` does not divide `p - 1`,
/// since no order-`q` subgroup exists in that case.
pub fn find_generator<R: Rng + ?Sized>(
    rng: &mut R,
    p: &BigUint,
    q: &BigUint,
) -> Result<BigUint, GroupError> {
    let p_minus_one = p - 1u32;
    if !(&p_minus_one % q).is_zero() {
        return Err(GroupError::InvalidPair);
    }
    let cofactor = &p_minus_one / q;
    let two = BigUint::from(2u32);
    for attempt in 1..=DEFAULT_MAX_ATTEMPTS {
        let h = rng.gen_biguint_range(&two, &p_minus_one);
        let g = h.modpow(&cofactor, p);
        if g > BigUint::one() {
            debug!(attempt, "found subgroup generator");
            return Ok(g);
        }
    }
    Err(GroupError::AttemptsExhausted(DEFAULT_MAX_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::generate_safe_prime_pair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generator_has_order_q() {
        let mut rng = StdRng::seed_from_u64(42);
        let (p, q) = generate_safe_prime_pair(&mut rng, 12).expect("pair");
        let g = find_generator(&mut rng, &p, &q).expect("generator");
        assert!(g > BigUint::one());
        assert!(g < p);
        assert!(g.modpow(&q, &p).is_one());
    }

    #[test]
    fn test_fixed_small_group() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = BigUint::from(23u32);
        let q = BigUint::from(11u32);
        let g = find_generator(&mut rng, &p, &q).expect("generator");
        assert!(g > BigUint::one());
        assert!(g.modpow(&q, &p).is_one());
    }

    #[test]
    fn test_rejects_non_divisor_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = BigUint::from(23u32);
        let q = BigUint::from(7u32);
        assert_eq!(
            find_generator(&mut rng, &p, &q),
            Err(GroupError::InvalidPair)
        );
    }
}

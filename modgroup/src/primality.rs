//! Miller-Rabin probabilistic primality testing.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// Default number of Miller-Rabin rounds.
///
/// The probability of declaring a composite prime is at most `4^-rounds`,
/// so 40 rounds push the error below `2^-80`.
pub const DEFAULT_ROUNDS: usize = 40;

/// Trial-division primes used as a fast path before the witness loop.
const SMALL_PRIMES: [u32; 9] = [2, 3, 5, 7, 11, 13, 17, 19, 23];

/// Decides whether `n` is (probably) prime.
///
/// Total over its input domain: `n < 2` returns `false`, never an error.
/// Candidates equal to a small prime are accepted and candidates divisible
/// by one are rejected without consuming randomness; everything else goes
/// through `rounds` Miller-Rabin witnesses drawn uniformly from `[2, n-2]`.
///
/// # Example
///
/// ```
/// use modgroup::{is_prime, DEFAULT_ROUNDS};
/// use num_bigint::BigUint;
/// use rand::thread_rng;
///
/// let mut rng = thread_rng();
/// assert!(is_prime(&mut rng, &BigUint::from(97u32), DEFAULT_ROUNDS));
/// assert!(!is_prime(&mut rng, &BigUint::from(561u32), DEFAULT_ROUNDS));
/// ```
pub fn is_prime<R: Rng + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for &small in &SMALL_PRIMES {
        let small = BigUint::from(small);
        if *n == small {
            return true;
        }
        if (n % &small).is_zero() {
            return false;
        }
    }

    // Write n - 1 = 2^r * d with d odd.
    let n_minus_one = n - 1u32;
    let mut d = n_minus_one.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1u32;
        r += 1;
    }

    let two = BigUint::from(2u32);
    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prime(n: u64) -> bool {
        let mut rng = StdRng::seed_from_u64(7);
        is_prime(&mut rng, &BigUint::from(n), DEFAULT_ROUNDS)
    }

    #[test]
    fn test_small_known_values() {
        assert!(prime(2));
        assert!(prime(3));
        assert!(prime(23));
        assert!(prime(29));
        assert!(prime(97));
        assert!(!prime(0));
        assert!(!prime(1));
        assert!(!prime(4));
        assert!(!prime(9));
        assert!(!prime(25));
    }

    #[test]
    fn test_rejects_carmichael_numbers() {
        // 561 falls to trial division; 252601 = 41 * 61 * 101 has no factor
        // below 29 and must be caught by the witness loop.
        assert!(!prime(561));
        assert!(!prime(252_601));
    }

    #[test]
    fn test_large_known_primes() {
        assert!(prime(7919));
        assert!(prime(104_729));
        assert!(prime(2_305_843_009_213_693_951)); // 2^61 - 1
    }

    #[test]
    fn test_large_composites() {
        assert!(!prime(2_305_843_009_213_693_949));
        assert!(!prime(1_000_000_016_000_000_063)); // 1000000007 * 1000000009
    }
}

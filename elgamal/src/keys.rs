//! Signing and verifying keys for the ElGamal signature scheme.

use core::fmt;

use modgroup::GroupParams;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::MAX_SIGN_ATTEMPTS;
use crate::errors::ElGamalError;
use crate::signatures::{message_representative, Signature};

/// A secret signing key for creating ElGamal signatures.
///
/// The signing key is the private exponent `x`, drawn uniformly from
/// `[2, p-2)`. It must be kept secret and protected from unauthorized
/// access; `Debug` output is redacted and the raw exponent is only
/// reachable through [`SigningKey::exponent`].
///
/// # Example
///
/// ```
/// use elgamal::SigningKey;
/// use modgroup::GroupParams;
/// use rand::thread_rng;
///
/// let mut rng = thread_rng();
/// let params = GroupParams::generate(&mut rng, 16).expect("params");
/// let signing_key = SigningKey::random(&mut rng, &params);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    x: BigUint,
}

/// A public verifying key for verifying ElGamal signatures.
///
/// The verifying key is the group element `y = g^x mod p`, derived from
/// the signing key. It may be shared freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    y: BigUint,
}

impl SigningKey {
    /// Generates a random signing key for the given domain parameters.
    ///
    /// The private exponent is uniform in `[2, p-2)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &GroupParams) -> Self {
        let two = BigUint::from(2u32);
        let upper = &params.p - 2u32;
        Self {
            x: rng.gen_biguint_range(&two, &upper),
        }
    }

    /// Derives the public verifying key `y = g^x mod p`.
    ///
    /// # Example
    ///
    /// ```
    /// use elgamal::SigningKey;
    /// use modgroup::GroupParams;
    /// use rand::thread_rng;
    ///
    /// let mut rng = thread_rng();
    /// let params = GroupParams::generate(&mut rng, 16).expect("params");
    /// let signing_key = SigningKey::random(&mut rng, &params);
    /// let verifying_key = signing_key.verifying_key(&params);
    /// ```
    pub fn verifying_key(&self, params: &GroupParams) -> VerifyingKey {
        VerifyingKey {
            y: params.g.modpow(&self.x, &params.p),
        }
    }

    /// The private exponent. Anything this value touches is inside the
    /// signer's trust boundary.
    pub fn exponent(&self) -> &BigUint {
        &self.x
    }

    /// Signs a message using this signing key.
    ///
    /// The signature is computed as:
    /// 1. `h = H(msg) mod q`
    /// 2. Draw an ephemeral exponent `k` uniformly from `[2, q-2]`,
    ///    redrawing while `gcd(k, q) != 1`
    /// 3. `r = g^k mod p`, redrawn if zero
    /// 4. `s = k^-1 (h - x * (r mod q)) mod q`, with the whole draw
    ///    repeated if `s = 0`
    ///
    /// The inverse is `k^(q-2) mod q` by Fermat's little theorem, `q`
    /// being prime. The ephemeral exponent is secret and single-use:
    /// reusing `k` for two messages leaks `x`.
    ///
    /// # Errors
    ///
    /// Returns [`ElGamalError::NonceRetriesExhausted`] if no draw yields a
    /// nonzero `s` within the redraw cap; each extra draw is a
    /// probability-`1/q` event, so this does not happen with a working
    /// random source.
    ///
    /// # Example
    ///
    /// ```
    /// use elgamal::SigningKey;
    /// use modgroup::GroupParams;
    /// use rand::thread_rng;
    ///
    /// let mut rng = thread_rng();
    /// let params = GroupParams::generate(&mut rng, 16).expect("params");
    /// let signing_key = SigningKey::random(&mut rng, &params);
    /// let signature = signing_key
    ///     .sign(&mut rng, &params, b"hello")
    ///     .expect("signing failed");
    /// ```
    pub fn sign<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        params: &GroupParams,
        msg: &[u8],
    ) -> Result<Signature, ElGamalError> {
        let h = message_representative(msg, &params.q);
        let two = BigUint::from(2u32);
        let q_minus_one = &params.q - 1u32;
        let q_minus_two = &params.q - 2u32;

        for _ in 0..MAX_SIGN_ATTEMPTS {
            let k = rng.gen_biguint_range(&two, &q_minus_one);
            if !k.gcd(&params.q).is_one() {
                continue;
            }
            let r = params.g.modpow(&k, &params.p);
            if r.is_zero() {
                continue;
            }
            let k_inv = k.modpow(&q_minus_two, &params.q);
            let xr = (&self.x * (&r % &params.q)) % &params.q;
            let s = (k_inv * ((&h + &params.q - xr) % &params.q)) % &params.q;
            if s.is_zero() {
                trace!("ephemeral draw produced s = 0, redrawing");
                continue;
            }
            return Ok(Signature { r, s });
        }
        Err(ElGamalError::NonceRetriesExhausted(MAX_SIGN_ATTEMPTS))
    }
}

impl VerifyingKey {
    /// Wraps a public value received from elsewhere.
    pub fn new(y: BigUint) -> Self {
        Self { y }
    }

    /// The public group element `y = g^x mod p`.
    pub fn value(&self) -> &BigUint {
        &self.y
    }

    /// Verifies a signature on a message using this verifying key.
    ///
    /// The check is the textbook equation: with `h = H(msg) mod q`,
    /// accept iff `y^r * r^s ≡ g^h (mod p)`.
    ///
    /// Total boolean predicate: signatures with `r` outside `(0, p)` or
    /// `s` outside `(0, q)` verify `false`, never an error.
    ///
    /// # Example
    ///
    /// ```
    /// use elgamal::SigningKey;
    /// use modgroup::GroupParams;
    /// use rand::thread_rng;
    ///
    /// let mut rng = thread_rng();
    /// let params = GroupParams::generate(&mut rng, 16).expect("params");
    /// let signing_key = SigningKey::random(&mut rng, &params);
    /// let verifying_key = signing_key.verifying_key(&params);
    ///
    /// let signature = signing_key
    ///     .sign(&mut rng, &params, b"hello")
    ///     .expect("signing failed");
    /// assert!(verifying_key.verify(&params, b"hello", &signature));
    /// ```
    pub fn verify(&self, params: &GroupParams, msg: &[u8], sig: &Signature) -> bool {
        if sig.r.is_zero() || sig.r >= params.p || sig.s.is_zero() || sig.s >= params.q {
            return false;
        }
        let h = message_representative(msg, &params.q);
        let v1 = (self.y.modpow(&sig.r, &params.p) * sig.r.modpow(&sig.s, &params.p)) % &params.p;
        let v2 = params.g.modpow(&h, &params.p);
        v1 == v2
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

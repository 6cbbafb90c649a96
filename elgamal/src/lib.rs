//! ElGamal signature scheme over a safe-prime subgroup.
//!
//! This library implements the classical ElGamal digital signature scheme
//! using:
//! - The prime-order subgroup of `Z_p*` with safe-prime modulus `p = 2q + 1`
//!   (domain parameters generated by the `modgroup` crate)
//! - SHA-256 for the message digest, interpreted as a big-endian integer
//!
//! # Overview
//!
//! The ElGamal signature scheme is a digital signature scheme that provides:
//! - Unforgeability: Only the holder of the private exponent can produce
//!   valid signatures
//! - Non-repudiation: The signer cannot deny having signed a message
//! - Randomized signatures: Each signing call draws a fresh ephemeral
//!   exponent, so two signatures over the same message differ
//!
//! # Example
//!
//! ```
//! use elgamal::SigningKey;
//! use modgroup::GroupParams;
//! use rand::thread_rng;
//!
//! // Generate domain parameters. 16-bit subgroups are for tests and demos;
//! // use 256 bits or more in production.
//! let mut rng = thread_rng();
//! let params = GroupParams::generate(&mut rng, 16).expect("parameter generation failed");
//!
//! // Generate a random signing key and derive the verifying key
//! let signing_key = SigningKey::random(&mut rng, &params);
//! let verifying_key = signing_key.verifying_key(&params);
//!
//! // Sign a message
//! let signature = signing_key
//!     .sign(&mut rng, &params, b"HELLO WORLD")
//!     .expect("signing failed");
//!
//! // Verify the signature
//! assert!(verifying_key.verify(&params, b"HELLO WORLD", &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG)
//! - Each signature must use a fresh ephemeral exponent; reusing `k` across
//!   two signatures under the same key leaks the private exponent
//! - Protect the signing key from unauthorized access
//! - Subgroup orders below 128 bits are insufficient for modern security
//!   margins and belong in tests only

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{DIGEST_BYTES, MAX_PRACTICAL_Q_BITS, MIN_SECURE_Q_BITS};
pub use errors::ElGamalError;
pub use keys::{SigningKey, VerifyingKey};
pub use signatures::{hash_to_int, Signature};

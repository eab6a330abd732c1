//! ML-KEM (Module-Lattice Key Encapsulation Mechanism) key generation.
//!
//! This crate implements the key-generation half of ML-KEM, the NIST
//! post-quantum KEM standardized in FIPS 203 and formerly known as
//! CRYSTALS-Kyber, for the three standard parameter sets:
//! - **ML-KEM-512**: NIST Level 1 (~128-bit security)
//! - **ML-KEM-768**: NIST Level 3 (~192-bit security)
//! - **ML-KEM-1024**: NIST Level 5 (~256-bit security)
//!
//! Everything below the keygen entry points is built in-crate: the
//! Keccak-f[1600] permutation and the SHA3/SHAKE sponge family,
//! arithmetic in Z_q[X]/(X^256 + 1) with q = 3329 (NTT, base
//! multiplication, Barrett/Montgomery reduction), centered-binomial
//! and rejection-uniform sampling, and the 12-bit key serialization.
//!
//! # Example Usage
//!
//! ```rust
//! use pqkem_ml_kem::{keygen, keygen_internal, params::ML_KEM_512};
//! use rand::rngs::OsRng;
//!
//! // Generate a key pair from fresh randomness
//! let (public_key, secret_key) = keygen(&mut OsRng, ML_KEM_512);
//! assert_eq!(public_key.to_bytes().len(), 800);
//! assert_eq!(secret_key.to_bytes().len(), 1632);
//!
//! // Or deterministically from a (d, z) seed pair
//! let (pk, sk) = keygen_internal(&[0u8; 32], &[1u8; 32], ML_KEM_512);
//! ```
//!
//! # Algorithm Overview
//!
//! Key generation follows the module-LWE recipe:
//! 1. Expand the seed: (rho, sigma) = G(d) with G = SHA3-512
//! 2. Derive the public k*k matrix A from rho via SHAKE128 rejection
//!    sampling (entries are NTT-domain by construction)
//! 3. Sample secret vector s and error vector e from sigma via
//!    SHAKE256 and the centered binomial distribution
//! 4. Compute t = A*s + e in the NTT domain
//! 5. Public key: (t, rho); secret key: (s, pk, H(pk), z) where z is
//!    the implicit-rejection seed
//!
//! The seed expansion hashes the bare 32-byte d (the round-3 Kyber
//! convention of the system this crate mirrors); the final FIPS 203
//! standard additionally absorbs the rank byte k, so key bytes are not
//! interchangeable with FIPS 203 test vectors even though the
//! encodings are layout-compatible.
//!
//! # Scope
//!
//! Encapsulation and decapsulation are not implemented here; they can
//! be layered on the same primitives (the sponge family, the ring
//! arithmetic, and the samplers are all public).
//!
//! # References
//!
//! - FIPS 203: Module-Lattice-Based Key-Encapsulation Mechanism
//!   Standard, <https://csrc.nist.gov/pubs/fips/203/final>
//! - FIPS 202: SHA-3 Standard

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod hash;
pub mod keccak;
pub mod keygen;
pub mod ntt;
pub mod packing;
pub mod params;
pub mod poly;
pub mod polyvec;
pub mod reduce;
pub mod sampling;

// Re-export main types and functions for convenience
pub use error::{MlKemError, Result};
pub use keygen::{keygen, keygen_internal, PublicKey, SecretKey};
pub use params::{Params, ML_KEM_1024, ML_KEM_512, ML_KEM_768};

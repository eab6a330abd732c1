//! ML-KEM parameter sets as defined in FIPS 203.
//!
//! This module defines the three security levels:
//! - ML-KEM-512: NIST Level 1 (~128-bit security)
//! - ML-KEM-768: NIST Level 3 (~192-bit security)
//! - ML-KEM-1024: NIST Level 5 (~256-bit security)
//!
//! Only key generation is implemented by this crate; the parameters
//! carry everything the keygen path needs.

/// The prime modulus q = 3329 (= 13 * 256 + 1).
pub const Q: u16 = 3329;

/// Polynomial degree n = 256.
pub const N: usize = 256;

/// Primitive 256th root of unity modulo q, used to build the NTT
/// twiddle table.
pub const ZETA: u16 = 17;

/// Size in bytes of seeds and hash outputs.
pub const SYMBYTES: usize = 32;

/// Size in bytes of a serialized polynomial (256 coefficients at 12
/// bits each).
pub const POLYBYTES: usize = 384;

/// Parameters for a specific ML-KEM security level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Module rank: A is a k*k matrix, s and e are length-k vectors.
    pub k: usize,
    /// CBD noise parameter for the secret and error vectors (keygen).
    pub eta1: usize,
    /// CBD noise parameter for encryption noise (unused by keygen,
    /// kept for the complete parameter set).
    pub eta2: usize,
}

impl Params {
    /// Returns the public key size in bytes.
    ///
    /// pk = t_hat serialized (k * 384 bytes) || rho (32 bytes).
    pub const fn public_key_size(&self) -> usize {
        self.k * POLYBYTES + SYMBYTES
    }

    /// Returns the secret key size in bytes.
    ///
    /// sk = s_hat serialized (k * 384) || pk || H(pk) (32) || z (32).
    pub const fn secret_key_size(&self) -> usize {
        self.k * POLYBYTES + self.public_key_size() + 2 * SYMBYTES
    }
}

/// ML-KEM-512 parameters (~128-bit security, NIST Level 1).
pub const ML_KEM_512: Params = Params {
    k: 2,
    eta1: 3,
    eta2: 2,
};

/// ML-KEM-768 parameters (~192-bit security, NIST Level 3).
pub const ML_KEM_768: Params = Params {
    k: 3,
    eta1: 2,
    eta2: 2,
};

/// ML-KEM-1024 parameters (~256-bit security, NIST Level 5).
pub const ML_KEM_1024: Params = Params {
    k: 4,
    eta1: 2,
    eta2: 2,
};

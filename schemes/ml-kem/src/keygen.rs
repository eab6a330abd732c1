//! Key generation for ML-KEM.
//!
//! Implements the K-PKE/ML-KEM key-generation sequence: expand the
//! seed into (rho, sigma), derive the public matrix A from rho and the
//! secret/error vectors from sigma, compute t = A*s + e in the NTT
//! domain, and assemble the FIPS 203 key encodings
//!
//! ```text
//! pk = t_hat || rho                          (k*384 + 32 bytes)
//! sk = s_hat || pk || H(pk) || z             (k*384 + |pk| + 64 bytes)
//! ```
//!
//! Encapsulation and decapsulation are not part of this crate.

use crate::error::{MlKemError, Result};
use crate::hash::{hash_g, hash_h};
use crate::packing::{pack_polyvec, pack_public_key, unpack_polyvec, unpack_public_key};
use crate::params::{Params, POLYBYTES, SYMBYTES};
use crate::polyvec::PolyVec;
use crate::sampling::{expand_matrix, sample_noise_vec};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// An ML-KEM public (encapsulation) key.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// NTT-domain vector t_hat = A*s_hat + e_hat.
    pub t_hat: PolyVec,
    /// Seed for regenerating the matrix A.
    pub rho: [u8; SYMBYTES],
    /// Parameter set.
    pub params: Params,
}

impl PublicKey {
    /// Serializes the public key: t_hat packed followed by rho.
    pub fn to_bytes(&self) -> Vec<u8> {
        pack_public_key(&self.t_hat, &self.rho)
    }

    /// Deserializes a public key.
    pub fn from_bytes(bytes: &[u8], params: Params) -> Result<Self> {
        let (t_hat, rho) = unpack_public_key(bytes, &params)?;
        Ok(PublicKey {
            t_hat,
            rho,
            params,
        })
    }

    /// Returns the public key fingerprint H(pk).
    pub fn hash(&self) -> [u8; SYMBYTES] {
        hash_h(&self.to_bytes())
    }
}

/// An ML-KEM secret (decapsulation) key.
///
/// # Security
///
/// This struct implements `Drop` to zeroize the secret vector and the
/// implicit-rejection seed when dropped.
#[derive(Clone)]
pub struct SecretKey {
    /// NTT-domain secret vector s_hat.
    pub s_hat: PolyVec,
    /// Full copy of the public key (needed for decapsulation).
    pub public_key: PublicKey,
    /// Cached public key fingerprint H(pk).
    pub pk_hash: [u8; SYMBYTES],
    /// Implicit-rejection seed, copied verbatim from keygen input.
    pub z: [u8; SYMBYTES],
    /// Parameter set.
    pub params: Params,
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        for poly in &mut self.s_hat.polys {
            poly.coeffs.zeroize();
        }
        self.z.zeroize();
    }
}

impl SecretKey {
    /// Serializes the secret key: s_hat || pk || H(pk) || z.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.params.secret_key_size());
        bytes.extend(pack_polyvec(&self.s_hat));
        bytes.extend(self.public_key.to_bytes());
        bytes.extend_from_slice(&self.pk_hash);
        bytes.extend_from_slice(&self.z);
        bytes
    }

    /// Deserializes a secret key.
    pub fn from_bytes(bytes: &[u8], params: Params) -> Result<Self> {
        if bytes.len() != params.secret_key_size() {
            return Err(MlKemError::InvalidLength {
                context: "secret key",
                expected: params.secret_key_size(),
                actual: bytes.len(),
            });
        }

        let s_end = params.k * POLYBYTES;
        let pk_end = s_end + params.public_key_size();
        let h_end = pk_end + SYMBYTES;

        let s_hat = unpack_polyvec(&bytes[..s_end], params.k)?;
        let public_key = PublicKey::from_bytes(&bytes[s_end..pk_end], params)?;

        let mut pk_hash = [0u8; SYMBYTES];
        pk_hash.copy_from_slice(&bytes[pk_end..h_end]);
        let mut z = [0u8; SYMBYTES];
        z.copy_from_slice(&bytes[h_end..]);

        Ok(SecretKey {
            s_hat,
            public_key,
            pk_hash,
            z,
            params,
        })
    }
}

/// Generates an ML-KEM key pair from fresh randomness.
///
/// Draws the 32-byte generation seed d and the 32-byte
/// implicit-rejection seed z from the RNG, then runs the
/// deterministic path.
pub fn keygen<R: RngCore + CryptoRng>(rng: &mut R, params: Params) -> (PublicKey, SecretKey) {
    let mut d = [0u8; SYMBYTES];
    let mut z = [0u8; SYMBYTES];
    rng.fill_bytes(&mut d);
    rng.fill_bytes(&mut z);

    keygen_internal(&d, &z, params)
}

/// Deterministic key generation from the seed pair (d, z).
///
/// Every step is a total function over fixed-size buffers; this
/// function cannot fail. Calling it twice with the same inputs yields
/// byte-identical keys.
pub fn keygen_internal(
    d: &[u8; SYMBYTES],
    z: &[u8; SYMBYTES],
    params: Params,
) -> (PublicKey, SecretKey) {
    // (rho, sigma) = G(d)
    let buf = hash_g(d);
    let mut rho = [0u8; SYMBYTES];
    let mut sigma = [0u8; SYMBYTES];
    rho.copy_from_slice(&buf[..SYMBYTES]);
    sigma.copy_from_slice(&buf[SYMBYTES..]);

    // A from rho, already NTT-domain by construction
    let a = expand_matrix(&rho, params.k);

    // Secret and error vectors from sigma with consecutive PRF nonces
    let mut s_hat = sample_noise_vec(&sigma, &params, 0);
    let mut e_hat = sample_noise_vec(&sigma, &params, params.k as u8);

    s_hat.ntt();
    e_hat.ntt();

    // t_hat = A * s_hat + e_hat, normalized for serialization
    let mut t_hat = a.mul_vec(&s_hat);
    t_hat += &e_hat;
    t_hat.reduce();

    let public_key = PublicKey {
        t_hat,
        rho,
        params,
    };
    let pk_hash = public_key.hash();

    let secret_key = SecretKey {
        s_hat,
        public_key: public_key.clone(),
        pk_hash,
        z: *z,
        params,
    };

    (public_key, secret_key)
}

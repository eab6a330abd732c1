//! Deterministic sampling for ML-KEM key generation.
//!
//! Two samplers feed keygen:
//! - rejection sampling of uniform NTT-domain coefficients from
//!   SHAKE128 output (matrix expansion)
//! - centered binomial distribution (CBD) noise from SHAKE256 PRF
//!   output (secret and error vectors)

use crate::hash::{prf, xof};
use crate::params::{Params, N, Q, SYMBYTES};
use crate::poly::Poly;
use crate::polyvec::{PolyMatrix, PolyVec};

/// Initial XOF draw for one uniform polynomial: three full SHAKE128
/// blocks. Two 12-bit candidates per 3 bytes at an acceptance rate of
/// q/4096 makes 336 candidates per draw overwhelmingly sufficient for
/// 256 coefficients.
const REJ_UNIFORM_BUFLEN: usize = 504;

/// Samples a polynomial with coefficients uniform in [0, q), in
/// NTT-domain order, from SHAKE128(seed || col || row).
///
/// Scans 3-byte groups for two 12-bit candidates each and accepts
/// those below q. If the initial draw is exhausted early (possible in
/// principle, never observed in practice) the sampler keeps squeezing
/// one more block at a time instead of under-filling.
pub fn sample_uniform(seed: &[u8; SYMBYTES], col: u8, row: u8) -> Poly {
    let mut reader = xof(seed, col, row);
    let mut buf = [0u8; REJ_UNIFORM_BUFLEN];
    reader.read(&mut buf);

    let mut poly = Poly::zero();
    let mut ctr = scan_candidates(&mut poly, 0, &buf);

    while ctr < N {
        let mut block = [0u8; crate::keccak::SHAKE128_RATE];
        reader.read(&mut block);
        ctr = scan_candidates(&mut poly, ctr, &block);
    }

    poly
}

/// Scans `buf` in 3-byte groups, accepting 12-bit candidates below q.
/// Returns the updated fill count.
fn scan_candidates(poly: &mut Poly, mut ctr: usize, buf: &[u8]) -> usize {
    let mut pos = 0;
    while ctr < N && pos + 3 <= buf.len() {
        let val0 = (u16::from(buf[pos]) | (u16::from(buf[pos + 1]) << 8)) & 0x0fff;
        let val1 = (u16::from(buf[pos + 1]) >> 4) | ((u16::from(buf[pos + 2]) << 4) & 0x0fff);
        pos += 3;

        if val0 < Q {
            poly.coeffs[ctr] = val0;
            ctr += 1;
        }
        if ctr < N && val1 < Q {
            poly.coeffs[ctr] = val1;
            ctr += 1;
        }
    }
    ctr
}

/// Samples a CBD polynomial from a PRF output buffer.
///
/// Coefficients come out as `a - b + q`, i.e. in [q-eta, q+eta] rather
/// than [0, q); canonicalization is deferred to serialization time.
pub fn sample_cbd(eta: usize, buf: &[u8]) -> Poly {
    match eta {
        2 => cbd_eta2(buf),
        3 => cbd_eta3(buf),
        _ => panic!("Unsupported eta value: {}", eta),
    }
}

/// CBD with eta = 3: 3 bytes yield four coefficients.
///
/// Each 6-bit group splits into two 3-bit halves whose popcounts give
/// the binomial samples a and b.
fn cbd_eta3(buf: &[u8]) -> Poly {
    assert!(buf.len() >= 3 * N / 4, "CBD eta=3 needs 192 bytes");

    let mut poly = Poly::zero();
    for i in 0..N / 4 {
        let mut t = u32::from(buf[3 * i]);
        t |= u32::from(buf[3 * i + 1]) << 8;
        t |= u32::from(buf[3 * i + 2]) << 16;

        for j in 0..4 {
            let d = t & 0x3f;
            let a = (d & 0x1) + ((d >> 1) & 0x1) + ((d >> 2) & 0x1);
            let b = ((d >> 3) & 0x1) + ((d >> 4) & 0x1) + ((d >> 5) & 0x1);
            poly.coeffs[4 * i + j] = (a + u32::from(Q) - b) as u16;
            t >>= 6;
        }
    }
    poly
}

/// CBD with eta = 2: one byte yields two coefficients.
///
/// For each 4-bit group, a sums bits {0, 2} and b sums bits {1, 3}.
/// Unused by the k=2 keygen path (eta1 = 3 there), kept for the
/// complete sampler family.
fn cbd_eta2(buf: &[u8]) -> Poly {
    assert!(buf.len() >= N / 2, "CBD eta=2 needs 128 bytes");

    let mut poly = Poly::zero();
    for i in 0..N / 2 {
        let nibble = u32::from(buf[i / 2] >> (4 * (i % 2))) & 0x0f;
        let a = (nibble & 0x1) + ((nibble >> 2) & 0x1);
        let b = ((nibble >> 1) & 0x1) + ((nibble >> 3) & 0x1);
        poly.coeffs[i] = (a + u32::from(Q) - b) as u16;
    }
    poly
}

/// Expands the public seed rho into the k*k matrix A.
///
/// A[i][j] = sample_uniform(rho, j, i): the column index byte is
/// absorbed before the row index byte, matching the reference
/// derivation of the non-transposed matrix. Entries are already in the
/// NTT domain by construction and the matrix is never mutated after
/// expansion.
pub fn expand_matrix(rho: &[u8; SYMBYTES], k: usize) -> PolyMatrix {
    let mut a = PolyMatrix::zero(k);
    for i in 0..k {
        for j in 0..k {
            a.rows[i].polys[j] = sample_uniform(rho, j as u8, i as u8);
        }
    }
    a
}

/// Samples a length-k noise vector: polynomial i is
/// CBD_eta(PRF(eta, sigma, base_nonce + i)).
pub fn sample_noise_vec(sigma: &[u8; SYMBYTES], params: &Params, base_nonce: u8) -> PolyVec {
    let mut v = PolyVec::zero(params.k);
    for (i, poly) in v.polys.iter_mut().enumerate() {
        let buf = prf(params.eta1, sigma, base_nonce + i as u8);
        *poly = sample_cbd(params.eta1, &buf);
    }
    v
}

//! Byte-level serialization for ML-KEM polynomials and keys.
//!
//! Polynomials serialize at 12 bits per coefficient: two canonical
//! coefficients pack into 3 bytes, little-endian bit order, for 384
//! bytes per polynomial. Deserialization is the exact inverse and does
//! not validate that decoded values are below q (the format is
//! trusted; canonical inputs round-trip exactly).

use crate::error::{MlKemError, Result};
use crate::params::{Params, N, POLYBYTES, SYMBYTES};
use crate::poly::Poly;
use crate::polyvec::PolyVec;
use crate::reduce::csubq;

/// Packs one polynomial into 384 bytes.
///
/// Coefficients are canonicalized with `csubq` first, so inputs may
/// still carry the CBD/addition slack above q.
pub fn pack_poly(poly: &Poly) -> Vec<u8> {
    let mut bytes = vec![0u8; POLYBYTES];
    for i in (0..N).step_by(2) {
        let t0 = csubq(poly.coeffs[i]);
        let t1 = csubq(poly.coeffs[i + 1]);

        bytes[3 * i / 2] = t0 as u8;
        bytes[3 * i / 2 + 1] = ((t0 >> 8) | (t1 << 4)) as u8;
        bytes[3 * i / 2 + 2] = (t1 >> 4) as u8;
    }
    bytes
}

/// Unpacks one polynomial from 384 bytes.
pub fn unpack_poly(bytes: &[u8]) -> Result<Poly> {
    if bytes.len() != POLYBYTES {
        return Err(MlKemError::InvalidLength {
            context: "polynomial",
            expected: POLYBYTES,
            actual: bytes.len(),
        });
    }

    let mut poly = Poly::zero();
    for i in (0..N).step_by(2) {
        poly.coeffs[i] =
            (u16::from(bytes[3 * i / 2]) | (u16::from(bytes[3 * i / 2 + 1]) << 8)) & 0x0fff;
        poly.coeffs[i + 1] =
            ((u16::from(bytes[3 * i / 2 + 1]) >> 4) | (u16::from(bytes[3 * i / 2 + 2]) << 4))
                & 0x0fff;
    }
    Ok(poly)
}

/// Packs a polynomial vector, one 384-byte polynomial after another.
pub fn pack_polyvec(v: &PolyVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(v.len() * POLYBYTES);
    for poly in &v.polys {
        bytes.extend(pack_poly(poly));
    }
    bytes
}

/// Unpacks a polynomial vector of the given rank.
pub fn unpack_polyvec(bytes: &[u8], k: usize) -> Result<PolyVec> {
    if bytes.len() != k * POLYBYTES {
        return Err(MlKemError::InvalidLength {
            context: "polynomial vector",
            expected: k * POLYBYTES,
            actual: bytes.len(),
        });
    }

    let mut v = PolyVec::zero(k);
    for (i, poly) in v.polys.iter_mut().enumerate() {
        *poly = unpack_poly(&bytes[i * POLYBYTES..(i + 1) * POLYBYTES])?;
    }
    Ok(v)
}

/// Packs a public key: t_hat serialized followed by rho.
pub fn pack_public_key(t_hat: &PolyVec, rho: &[u8; SYMBYTES]) -> Vec<u8> {
    let mut bytes = pack_polyvec(t_hat);
    bytes.extend_from_slice(rho);
    bytes
}

/// Unpacks a public key into (t_hat, rho).
pub fn unpack_public_key(bytes: &[u8], params: &Params) -> Result<(PolyVec, [u8; SYMBYTES])> {
    if bytes.len() != params.public_key_size() {
        return Err(MlKemError::InvalidLength {
            context: "public key",
            expected: params.public_key_size(),
            actual: bytes.len(),
        });
    }

    let split = params.k * POLYBYTES;
    let t_hat = unpack_polyvec(&bytes[..split], params.k)?;
    let mut rho = [0u8; SYMBYTES];
    rho.copy_from_slice(&bytes[split..]);
    Ok((t_hat, rho))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ML_KEM_512, Q};

    fn canonical_poly(step: usize) -> Poly {
        let mut p = Poly::zero();
        for i in 0..N {
            p.coeffs[i] = ((i * step + 1) % Q as usize) as u16;
        }
        p
    }

    #[test]
    fn test_poly_roundtrip() {
        let p = canonical_poly(31);
        let bytes = pack_poly(&p);
        assert_eq!(bytes.len(), POLYBYTES);
        let q = unpack_poly(&bytes).unwrap();
        assert_eq!(p.coeffs[..], q.coeffs[..]);
    }

    #[test]
    fn test_pack_canonicalizes() {
        // q and 0 are the same field element and must serialize alike
        let mut a = Poly::zero();
        a.coeffs[0] = Q;
        let b = Poly::zero();
        assert_eq!(pack_poly(&a), pack_poly(&b));
    }

    #[test]
    fn test_unpack_wrong_length() {
        let err = unpack_poly(&[0u8; POLYBYTES - 1]).unwrap_err();
        assert!(matches!(err, MlKemError::InvalidLength { .. }));
    }

    #[test]
    fn test_byte_layout() {
        // c0 = 0xabc, c1 = 0x123 -> bytes bc, 3a, 12
        let mut p = Poly::zero();
        p.coeffs[0] = 0xabc;
        p.coeffs[1] = 0x123;
        let bytes = pack_poly(&p);
        assert_eq!(bytes[0], 0xbc);
        assert_eq!(bytes[1], 0x3a);
        assert_eq!(bytes[2], 0x12);
    }

    #[test]
    fn test_polyvec_roundtrip() {
        let mut v = PolyVec::zero(2);
        v.polys[0] = canonical_poly(7);
        v.polys[1] = canonical_poly(13);

        let bytes = pack_polyvec(&v);
        assert_eq!(bytes.len(), 2 * POLYBYTES);
        let w = unpack_polyvec(&bytes, 2).unwrap();
        assert_eq!(v, w);
    }

    #[test]
    fn test_public_key_roundtrip() {
        let mut t = PolyVec::zero(2);
        t.polys[0] = canonical_poly(5);
        t.polys[1] = canonical_poly(9);
        let rho = [0x5au8; SYMBYTES];

        let bytes = pack_public_key(&t, &rho);
        assert_eq!(bytes.len(), ML_KEM_512.public_key_size());

        let (t2, rho2) = unpack_public_key(&bytes, &ML_KEM_512).unwrap();
        assert_eq!(t, t2);
        assert_eq!(rho, rho2);
    }

    #[test]
    fn test_public_key_wrong_length() {
        let err = unpack_public_key(&[0u8; 801], &ML_KEM_512).unwrap_err();
        assert_eq!(
            err,
            MlKemError::InvalidLength {
                context: "public key",
                expected: 800,
                actual: 801,
            }
        );
    }
}

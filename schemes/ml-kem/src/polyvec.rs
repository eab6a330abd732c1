//! Polynomial vectors and matrices for ML-KEM.
//!
//! In ML-KEM with module rank k:
//! - s and e are vectors of k polynomials
//! - A is a k*k matrix expanded from a public seed
//! - t = A*s + e is a vector of k polynomials
//!
//! All products happen in the NTT domain.

use crate::poly::Poly;
use std::ops::{Add, AddAssign};

/// A vector of polynomials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyVec {
    /// The polynomials in this vector.
    pub polys: Vec<Poly>,
}

impl PolyVec {
    /// Creates a zero vector of the given length.
    pub fn zero(len: usize) -> Self {
        PolyVec {
            polys: (0..len).map(|_| Poly::zero()).collect(),
        }
    }

    /// Returns the length of this vector.
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Reduces all coefficients in all polynomials to [0, q).
    pub fn reduce(&mut self) {
        for poly in &mut self.polys {
            poly.reduce();
        }
    }

    /// Applies the forward NTT to every polynomial.
    pub fn ntt(&mut self) {
        for poly in &mut self.polys {
            poly.ntt();
        }
    }

    /// Applies the inverse NTT to every polynomial.
    pub fn inv_ntt(&mut self) {
        for poly in &mut self.polys {
            poly.inv_ntt();
        }
    }

    /// Dot product of two NTT-domain vectors.
    ///
    /// The first base multiplication initializes the accumulator, the
    /// rest accumulate through reducing addition. Result stays in the
    /// NTT domain.
    pub fn dot(&self, other: &PolyVec) -> Poly {
        assert_eq!(self.len(), other.len(), "vector lengths must match");

        let mut result = self.polys[0].basemul(&other.polys[0]);
        for (a, b) in self.polys.iter().zip(other.polys.iter()).skip(1) {
            result += &a.basemul(b);
        }
        result
    }
}

impl Add for &PolyVec {
    type Output = PolyVec;

    fn add(self, rhs: &PolyVec) -> PolyVec {
        assert_eq!(self.len(), rhs.len(), "vector lengths must match");
        PolyVec {
            polys: self
                .polys
                .iter()
                .zip(rhs.polys.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl AddAssign<&PolyVec> for PolyVec {
    fn add_assign(&mut self, rhs: &PolyVec) {
        assert_eq!(self.len(), rhs.len(), "vector lengths must match");
        for (a, b) in self.polys.iter_mut().zip(rhs.polys.iter()) {
            *a += b;
        }
    }
}

/// A k*k matrix of polynomials, stored row-wise.
#[derive(Clone, Debug)]
pub struct PolyMatrix {
    /// Rows of the matrix.
    pub rows: Vec<PolyVec>,
    /// Dimension k.
    pub k: usize,
}

impl PolyMatrix {
    /// Creates a zero matrix of dimension k * k.
    pub fn zero(k: usize) -> Self {
        PolyMatrix {
            rows: (0..k).map(|_| PolyVec::zero(k)).collect(),
            k,
        }
    }

    /// Matrix-vector multiplication A * v in the NTT domain.
    pub fn mul_vec(&self, v: &PolyVec) -> PolyVec {
        assert_eq!(self.k, v.len(), "matrix dimension must match vector");

        PolyVec {
            polys: self.rows.iter().map(|row| row.dot(v)).collect(),
        }
    }
}

use num_complex::Complex64;
use std::fmt;

pub type C64 = Complex64;

/// A matrix buffer could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    pub dim: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "memory allocation failed for a {}x{} complex matrix",
            self.dim, self.dim
        )
    }
}

impl std::error::Error for AllocError {}

/// Square complex matrix, flat row-major storage.
#[derive(Clone, Debug, PartialEq)]
pub struct CMatrix {
    dim: usize,
    data: Vec<C64>,
}

impl CMatrix {
    pub fn zeros(dim: usize) -> Result<Self, AllocError> {
        let len = dim.checked_mul(dim).ok_or(AllocError { dim })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| AllocError { dim })?;
        data.resize(len, C64::new(0.0, 0.0));
        Ok(Self { dim, data })
    }

    /// Fills entry (i, j) from `f(i, j)`, rows first.
    pub fn from_fn(
        dim: usize,
        mut f: impl FnMut(usize, usize) -> C64,
    ) -> Result<Self, AllocError> {
        let len = dim.checked_mul(dim).ok_or(AllocError { dim })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| AllocError { dim })?;
        for i in 0..dim {
            for j in 0..dim {
                data.push(f(i, j));
            }
        }
        Ok(Self { dim, data })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.dim + j
    }

    pub fn get(&self, i: usize, j: usize) -> C64 {
        self.data[self.idx(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, v: C64) {
        let k = self.idx(i, j);
        self.data[k] = v;
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[C64] {
        &self.data
    }

    /// Conjugate transpose: out[i][j] = conj(self[j][i]).
    pub fn dagger(&self) -> Result<Self, AllocError> {
        Self::from_fn(self.dim, |i, j| self.get(j, i).conj())
    }

    /// Standard complex matrix product.
    pub fn mul(&self, other: &Self) -> Result<Self, AllocError> {
        assert_eq!(self.dim, other.dim, "matrix product needs equal dimensions");
        let mut out = Self::zeros(self.dim)?;
        for i in 0..self.dim {
            for j in 0..self.dim {
                let mut sum = C64::new(0.0, 0.0);
                for k in 0..self.dim {
                    sum += self.get(i, k) * other.get(k, j);
                }
                out.set(i, j, sum);
            }
        }
        Ok(out)
    }

    /// Diagonal-times-matrix: out[i][j] = d[i]·self[i][j].
    pub fn scale_rows(&self, d: &[f64]) -> Result<Self, AllocError> {
        assert_eq!(d.len(), self.dim, "diagonal length must match dimension");
        Self::from_fn(self.dim, |i, j| self.get(i, j) * d[i])
    }

    /// Whether self[i][j] = conj(self[j][i]) for all i, j within `tol`.
    pub fn is_hermitian(&self, tol: f64) -> bool {
        for i in 0..self.dim {
            for j in 0..=i {
                let diff = (self.get(i, j) - self.get(j, i).conj()).norm();
                if diff > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Rounds to five decimal places.
pub fn round5(x: f64) -> f64 {
    (x * 100_000.0).round() / 100_000.0
}

#[cfg(test)]
mod tests {
    use super::{round5, CMatrix, C64};

    #[test]
    fn dagger_conjugates_and_transposes() {
        let m = CMatrix::from_fn(2, |i, j| C64::new((i * 2 + j) as f64, 1.0)).unwrap();
        let d = m.dagger().unwrap();

        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(d.get(i, j), m.get(j, i).conj());
            }
        }
    }

    #[test]
    fn identity_is_multiplicative_unit() {
        let id = CMatrix::from_fn(3, |i, j| {
            if i == j {
                C64::new(1.0, 0.0)
            } else {
                C64::new(0.0, 0.0)
            }
        })
        .unwrap();
        let m = CMatrix::from_fn(3, |i, j| C64::new(i as f64, j as f64)).unwrap();

        assert_eq!(m.mul(&id).unwrap(), m);
        assert_eq!(id.mul(&m).unwrap(), m);
    }

    #[test]
    fn scale_rows_multiplies_each_row() {
        let m = CMatrix::from_fn(2, |_, _| C64::new(1.0, -1.0)).unwrap();
        let s = m.scale_rows(&[2.0, 3.0]).unwrap();

        assert_eq!(s.get(0, 1), C64::new(2.0, -2.0));
        assert_eq!(s.get(1, 0), C64::new(3.0, -3.0));
    }

    #[test]
    fn round5_truncates_to_five_decimals() {
        assert_eq!(round5(0.123456789), 0.12346);
        assert_eq!(round5(-0.123454), -0.12345);
        assert_eq!(round5(2.0), 2.0);
    }

    #[test]
    fn hermitian_check_sees_asymmetry() {
        let mut m = CMatrix::from_fn(2, |i, j| {
            if i == j {
                C64::new(1.0, 0.0)
            } else {
                C64::new(0.5, if i < j { 0.25 } else { -0.25 })
            }
        })
        .unwrap();
        assert!(m.is_hermitian(1e-12));

        m.set(0, 1, C64::new(0.5, 0.3));
        assert!(!m.is_hermitian(1e-12));
    }
}

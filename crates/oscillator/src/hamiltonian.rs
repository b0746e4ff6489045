use crate::fourier::fourier_matrix;
use cmat::{round5, AllocError, CMatrix, C64};
use std::fmt;

pub const MIN_DIM: usize = 2;
pub const DEFAULT_DIM: usize = 8;
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Failure while configuring or building the oscillator Hamiltonian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Basis dimension below the smallest usable oscillator basis.
    Dimension { dim: usize },
    /// A matrix buffer could not be obtained.
    Alloc(AllocError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Dimension { dim } => {
                write!(f, "dimension must be at least {}, got {}", MIN_DIM, dim)
            }
            BuildError::Alloc(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for BuildError {
    fn from(e: AllocError) -> Self {
        BuildError::Alloc(e)
    }
}

/// Discretized harmonic oscillator over an n-point basis.
///
/// The momentum operator is the DFT conjugation of the impulse diagonal
/// diag(0, 1, …, n−1); the position operator is the linear diagonal
/// Q[i] = weight·(−(n−1)/2 + i). `hamiltonian` assembles
/// H = 0.5·(P² + Q²).
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    dim: usize,
    weight: f64,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            weight: DEFAULT_WEIGHT,
        }
    }
}

impl Oscillator {
    pub fn new(dim: usize, weight: f64) -> Result<Self, BuildError> {
        if dim < MIN_DIM {
            return Err(BuildError::Dimension { dim });
        }
        Ok(Self { dim, weight })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_dim(&mut self, dim: usize) -> Result<(), BuildError> {
        if dim < MIN_DIM {
            return Err(BuildError::Dimension { dim });
        }
        self.dim = dim;
        Ok(())
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Builds the Hamiltonian, Hermitian by construction. Real and
    /// imaginary parts of every entry are rounded to five decimals on the
    /// way out; downstream consumers rely on the stabilized values.
    pub fn hamiltonian(&self) -> Result<CMatrix, BuildError> {
        let n = self.dim;

        let f = fourier_matrix(n)?;
        let finv = f.dagger()?;

        let impulse: Vec<f64> = (0..n).map(|i| i as f64).collect();

        // P = F · (diag(impulse) · F†): scale the rows of F† first, then
        // left-multiply by F.
        let p = f.mul(&finv.scale_rows(&impulse)?)?;
        let p2 = p.mul(&p)?;

        let half = (n - 1) as f64 / 2.0;
        let q: Vec<f64> = (0..n).map(|i| self.weight * (i as f64 - half)).collect();

        // Q is diagonal, so Q² touches the diagonal only.
        let mut h = CMatrix::zeros(n)?;
        for i in 0..n {
            for j in 0..n {
                let qterm = if i == j { q[i] * q[i] } else { 0.0 };
                let v = (p2.get(i, j) + C64::new(qterm, 0.0)) * 0.5;
                h.set(i, j, C64::new(round5(v.re), round5(v.im)));
            }
        }
        Ok(h)
    }
}

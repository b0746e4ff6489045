use cmat::wire::{self, WireError};
use cmat::CMatrix;
use faer::{Mat, Side};
use num_complex::Complex64;
use std::fmt;

pub const DEFAULT_DIM: usize = 3;

/// Stage of the eigen-solve a numerical failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Sizing the output buffers ahead of the solve.
    Workspace,
    /// The decomposition itself.
    Decomposition,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Workspace => write!(f, "workspace sizing"),
            Stage::Decomposition => write!(f, "decomposition"),
        }
    }
}

/// Failure while configuring or running the eigensolver.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Dimension must be positive.
    Dimension { dim: usize },
    /// Malformed input list; nothing was stored.
    Wire(WireError),
    /// A decomposition was requested before any matrix was accepted.
    NoMatrix,
    /// The underlying eigen-solve failed.
    Numerical { stage: Stage, detail: String },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Dimension { dim } => {
                write!(f, "dimension must be positive, got {}", dim)
            }
            SolveError::Wire(e) => write!(f, "{}", e),
            SolveError::NoMatrix => write!(f, "no matrix stored"),
            SolveError::Numerical { stage, detail } => {
                write!(f, "eigen-decomposition failed during {}: {}", stage, detail)
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Wire(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WireError> for SolveError {
    fn from(e: WireError) -> Self {
        SolveError::Wire(e)
    }
}

/// One eigen-decomposition result.
///
/// `eigenvalues` holds the n real eigenvalues in ascending order.
/// `eigenvectors` holds 2·n² floats in the solve's native column-major
/// layout with interleaved (re, im): row i of eigenvector j sits at flat
/// index 2·(j·n + i), and column j pairs with `eigenvalues[j]`. Input to
/// the solver is row-major; the output stays column-major. The asymmetry
/// is part of the wire contract and is deliberately not corrected.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    pub eigenvalues: Vec<f64>,
    pub eigenvectors: Vec<f64>,
}

/// Hermitian eigensolver over one stored matrix.
///
/// `accept` replaces the stored matrix wholesale; `decompose` leaves it in
/// place, so a stored matrix may be decomposed repeatedly. The input is
/// assumed Hermitian and is not verified.
#[derive(Clone, Debug)]
pub struct Eigensolver {
    dim: usize,
    matrix: Option<CMatrix>,
}

impl Default for Eigensolver {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            matrix: None,
        }
    }
}

impl Eigensolver {
    pub fn new(dim: usize) -> Result<Self, SolveError> {
        if dim == 0 {
            return Err(SolveError::Dimension { dim });
        }
        Ok(Self { dim, matrix: None })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn has_matrix(&self) -> bool {
        self.matrix.is_some()
    }

    /// Changes the working dimension. A new value discards any stored
    /// matrix; re-setting the current value keeps it.
    pub fn set_dim(&mut self, dim: usize) -> Result<(), SolveError> {
        if dim == 0 {
            return Err(SolveError::Dimension { dim });
        }
        if dim != self.dim {
            self.dim = dim;
            self.matrix = None;
        }
        Ok(())
    }

    /// Stores a matrix from its row-major interleaved wire list — exactly
    /// 2·n² values, entry (i, j) at 2·(i·n + j) — replacing any previous
    /// one. A rejected list leaves the stored matrix untouched.
    pub fn accept(&mut self, values: &[f64]) -> Result<(), SolveError> {
        let matrix = wire::decode_row_major(self.dim, values)?;
        self.matrix = Some(matrix);
        Ok(())
    }

    /// Computes eigenvalues and eigenvectors of the stored matrix.
    ///
    /// On any failure nothing is emitted and the stored matrix stays as it
    /// was.
    pub fn decompose(&self) -> Result<Decomposition, SolveError> {
        let matrix = self.matrix.as_ref().ok_or(SolveError::NoMatrix)?;
        let n = self.dim;

        let out_len = wire::encoded_len(n).ok_or_else(|| SolveError::Numerical {
            stage: Stage::Workspace,
            detail: format!("output length 2·{}² overflows", n),
        })?;

        // faer stores column-major; copying entry by entry is the
        // row-major → column-major conversion the solve wants.
        let mut a = Mat::<Complex64>::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                a.write(i, j, matrix.get(i, j));
            }
        }

        // Upper-triangle self-adjoint solve, values ascending.
        let evd = a.selfadjoint_eigendecomposition(Side::Upper);
        let s = evd.s().column_vector();
        let u = evd.u();

        let mut eigenvalues = Vec::with_capacity(n);
        for i in 0..n {
            eigenvalues.push(s.read(i).re);
        }

        let mut eigenvectors = Vec::with_capacity(out_len);
        for j in 0..n {
            for i in 0..n {
                let z = u.read(i, j);
                eigenvectors.push(z.re);
                eigenvectors.push(z.im);
            }
        }

        let finite = eigenvalues.iter().all(|w| w.is_finite())
            && eigenvectors.iter().all(|v| v.is_finite());
        if !finite {
            return Err(SolveError::Numerical {
                stage: Stage::Decomposition,
                detail: "solve produced non-finite output".to_string(),
            });
        }

        Ok(Decomposition {
            eigenvalues,
            eigenvectors,
        })
    }
}

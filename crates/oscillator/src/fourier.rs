use cmat::{AllocError, CMatrix};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Unitary DFT matrix: F[k][l] = n^(-1/2)·exp(2πi·k·l/n).
pub fn fourier_matrix(dim: usize) -> Result<CMatrix, AllocError> {
    let norm = 1.0 / (dim as f64).sqrt();
    CMatrix::from_fn(dim, |k, l| {
        let angle = 2.0 * PI * (k as f64) * (l as f64) / dim as f64;
        Complex64::new(angle.cos(), angle.sin()) * norm
    })
}

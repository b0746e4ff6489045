//! Flat wire format for complex matrices: interleaved (re, im) f64 pairs.
//!
//! Matrices travel row-major, entry (i, j) at flat index 2·(i·n + j). The
//! eigensolver emits its eigenvector lists column-major — entry (i, j) at
//! 2·(j·n + i) — passing the solve's native layout through unchanged. That
//! asymmetry is part of the wire contract.

use crate::matrix::{AllocError, CMatrix, C64};
use std::fmt;

/// Malformed wire input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Element count does not match 2·n².
    Count { expected: usize, got: usize },
    /// Storage for the decoded matrix could not be obtained.
    Alloc(AllocError),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::Count { expected, got } => {
                write!(f, "wrong element count, expected {} got {}", expected, got)
            }
            WireError::Alloc(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WireError::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for WireError {
    fn from(e: AllocError) -> Self {
        WireError::Alloc(e)
    }
}

/// Wire length of a dim×dim matrix: 2·dim². `None` when it overflows.
pub fn encoded_len(dim: usize) -> Option<usize> {
    dim.checked_mul(dim)?.checked_mul(2)
}

/// Flattens row-major: entry (i, j) lands at index 2·(i·n + j).
pub fn encode_row_major(m: &CMatrix) -> Vec<f64> {
    let n = m.dim();
    let mut out = Vec::with_capacity(2 * n * n);
    for i in 0..n {
        for j in 0..n {
            let z = m.get(i, j);
            out.push(z.re);
            out.push(z.im);
        }
    }
    out
}

/// Rebuilds a dim×dim matrix from its row-major wire list.
///
/// The length is checked before anything is allocated; a mismatched list
/// decodes to nothing.
pub fn decode_row_major(dim: usize, values: &[f64]) -> Result<CMatrix, WireError> {
    let expected = encoded_len(dim).ok_or(AllocError { dim })?;
    if values.len() != expected {
        return Err(WireError::Count {
            expected,
            got: values.len(),
        });
    }
    let m = CMatrix::from_fn(dim, |i, j| {
        let k = 2 * (i * dim + j);
        C64::new(values[k], values[k + 1])
    })?;
    Ok(m)
}

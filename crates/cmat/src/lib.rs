pub mod matrix;
pub mod wire;

pub use matrix::{round5, AllocError, CMatrix, C64};

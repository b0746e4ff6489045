pub mod fourier;
pub mod hamiltonian;

pub use hamiltonian::{BuildError, Oscillator, DEFAULT_DIM, DEFAULT_WEIGHT, MIN_DIM};

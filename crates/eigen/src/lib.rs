pub mod solver;

pub use solver::{Decomposition, Eigensolver, SolveError, Stage, DEFAULT_DIM};

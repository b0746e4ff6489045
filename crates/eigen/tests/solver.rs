use cmat::wire::encode_row_major;
use cmat::{CMatrix, C64};
use eigen::{Eigensolver, SolveError};
use oscillator::Oscillator;

fn oscillator_wire(n: usize, a: f64) -> Vec<f64> {
    let h = Oscillator::new(n, a).unwrap().hamiltonian().unwrap();
    encode_row_major(&h)
}

#[test]
fn decompose_without_input_is_an_error() {
    let solver = Eigensolver::new(4).unwrap();
    assert!(matches!(solver.decompose(), Err(SolveError::NoMatrix)));
}

#[test]
fn zero_dimension_is_rejected() {
    assert!(matches!(
        Eigensolver::new(0),
        Err(SolveError::Dimension { dim: 0 })
    ));
}

#[test]
fn default_dimension_is_three() {
    let solver = Eigensolver::default();
    assert_eq!(solver.dim(), 3);
    assert!(!solver.has_matrix());
}

#[test]
fn oscillator_output_feeds_straight_in() {
    for n in 2..=6 {
        let mut solver = Eigensolver::new(n).unwrap();
        solver.accept(&oscillator_wire(n, 1.0)).unwrap();
        let d = solver.decompose().unwrap();
        assert_eq!(d.eigenvalues.len(), n);
        assert_eq!(d.eigenvectors.len(), 2 * n * n);
    }
}

#[test]
fn two_level_spectrum_is_known() {
    let mut solver = Eigensolver::new(2).unwrap();
    solver.accept(&oscillator_wire(2, 1.0)).unwrap();
    let d = solver.decompose().unwrap();

    assert!((d.eigenvalues[0] - 0.125).abs() < 1e-9, "{:?}", d.eigenvalues);
    assert!((d.eigenvalues[1] - 0.625).abs() < 1e-9, "{:?}", d.eigenvalues);
}

#[test]
fn eigenvalues_come_back_ascending() {
    let mut solver = Eigensolver::new(8).unwrap();
    solver.accept(&oscillator_wire(8, 0.7)).unwrap();
    let d = solver.decompose().unwrap();

    for pair in d.eigenvalues.windows(2) {
        assert!(pair[0] <= pair[1], "eigenvalues not ascending: {:?}", pair);
    }
}

#[test]
fn eigenvectors_reconstruct_the_matrix_action() {
    let n = 6;
    let h = Oscillator::new(n, 1.3).unwrap().hamiltonian().unwrap();

    let mut solver = Eigensolver::new(n).unwrap();
    solver.accept(&encode_row_major(&h)).unwrap();
    let d = solver.decompose().unwrap();

    // Column j of the output (entry (i, j) at 2·(j·n + i)) must satisfy
    // H·v = w[j]·v.
    for j in 0..n {
        let v: Vec<C64> = (0..n)
            .map(|i| {
                let k = 2 * (j * n + i);
                C64::new(d.eigenvectors[k], d.eigenvectors[k + 1])
            })
            .collect();

        for i in 0..n {
            let mut hv = C64::new(0.0, 0.0);
            for k in 0..n {
                hv += h.get(i, k) * v[k];
            }
            let wv = v[i] * d.eigenvalues[j];
            let tol = 1e-6 * d.eigenvalues[j].abs().max(1.0);
            assert!(
                (hv - wv).norm() < tol,
                "residual {} at row {} of eigenvector {}",
                (hv - wv).norm(),
                i,
                j
            );
        }
    }
}

#[test]
fn rejected_input_keeps_the_stored_matrix() {
    let mut solver = Eigensolver::new(3).unwrap();
    solver.accept(&oscillator_wire(3, 1.0)).unwrap();
    let before = solver.decompose().unwrap();

    let short = vec![0.0; 17];
    match solver.accept(&short) {
        Err(SolveError::Wire(e)) => {
            assert_eq!(e.to_string(), "wrong element count, expected 18 got 17");
        }
        other => panic!("expected wire error, got {:?}", other),
    }

    let after = solver.decompose().unwrap();
    assert_eq!(before, after);
}

#[test]
fn accept_replaces_the_stored_matrix_wholesale() {
    let mut solver = Eigensolver::new(4).unwrap();
    solver.accept(&oscillator_wire(4, 1.0)).unwrap();
    solver.accept(&oscillator_wire(4, 2.0)).unwrap();

    let mut fresh = Eigensolver::new(4).unwrap();
    fresh.accept(&oscillator_wire(4, 2.0)).unwrap();

    assert_eq!(solver.decompose().unwrap(), fresh.decompose().unwrap());
}

#[test]
fn repeated_decomposition_is_identical() {
    let mut solver = Eigensolver::new(5).unwrap();
    solver.accept(&oscillator_wire(5, 1.0)).unwrap();

    let first = solver.decompose().unwrap();
    let second = solver.decompose().unwrap();
    assert_eq!(first, second);
}

#[test]
fn dimension_change_clears_storage() {
    let mut solver = Eigensolver::new(3).unwrap();
    solver.accept(&oscillator_wire(3, 1.0)).unwrap();

    // Same value: no-op, matrix kept.
    solver.set_dim(3).unwrap();
    assert!(solver.has_matrix());

    // New value: storage cleared, decompose is back to the empty state.
    solver.set_dim(4).unwrap();
    assert!(!solver.has_matrix());
    assert!(matches!(solver.decompose(), Err(SolveError::NoMatrix)));

    assert!(matches!(
        solver.set_dim(0),
        Err(SolveError::Dimension { dim: 0 })
    ));
    assert_eq!(solver.dim(), 4);
}

#[test]
fn works_on_a_complex_hermitian_matrix_with_known_spectrum() {
    // Pauli-Y-like matrix [[0, −i], [i, 0]] has eigenvalues ∓1.
    let m = CMatrix::from_fn(2, |i, j| {
        if i == 0 && j == 1 {
            C64::new(0.0, -1.0)
        } else if i == 1 && j == 0 {
            C64::new(0.0, 1.0)
        } else {
            C64::new(0.0, 0.0)
        }
    })
    .unwrap();

    let mut solver = Eigensolver::new(2).unwrap();
    solver.accept(&encode_row_major(&m)).unwrap();
    let d = solver.decompose().unwrap();

    assert!((d.eigenvalues[0] + 1.0).abs() < 1e-12, "{:?}", d.eigenvalues);
    assert!((d.eigenvalues[1] - 1.0).abs() < 1e-12, "{:?}", d.eigenvalues);
}

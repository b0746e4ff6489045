use clap::Parser;

use cmat::wire::encode_row_major;
use eigen::Eigensolver;
use oscillator::Oscillator;

/// Harmonic-oscillator spectrum: builds H = 0.5·(P² + Q²) for the given
/// dimension and potential weight, then diagonalizes it.
#[derive(Parser, Debug)]
#[command(author, version, about = "Harmonic oscillator spectrum")]
struct Args {
    /// Basis dimension (at least 2)
    #[arg(long, default_value_t = oscillator::DEFAULT_DIM)]
    n: usize,

    /// Potential weight: Q[i] = a·(−(n−1)/2 + i)
    #[arg(long, default_value_t = oscillator::DEFAULT_WEIGHT)]
    a: f64,

    /// Print the Hamiltonian as its row-major wire list and exit
    #[arg(long)]
    matrix: bool,

    /// Also print eigenvectors as the column-major wire list
    #[arg(long)]
    vectors: bool,
}

fn main() {
    let args = Args::parse();

    let osc = match Oscillator::new(args.n, args.a) {
        Ok(osc) => osc,
        Err(err) => fail(&err),
    };
    let h = match osc.hamiltonian() {
        Ok(h) => h,
        Err(err) => fail(&err),
    };
    let wire = encode_row_major(&h);

    if args.matrix {
        println!("{}", join(&wire));
        return;
    }

    let mut solver = match Eigensolver::new(args.n) {
        Ok(solver) => solver,
        Err(err) => fail(&err),
    };
    if let Err(err) = solver.accept(&wire) {
        fail(&err);
    }
    let d = match solver.decompose() {
        Ok(d) => d,
        Err(err) => fail(&err),
    };

    println!("n = {}, a = {}", args.n, args.a);
    for (k, w) in d.eigenvalues.iter().enumerate() {
        println!("E[{}] = {:.6}", k, w);
    }
    if args.vectors {
        println!("{}", join(&d.eigenvectors));
    }
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

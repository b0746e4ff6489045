use clap::Parser;
use rayon::prelude::*;

use cmat::wire::encode_row_major;
use eigen::Eigensolver;
use oscillator::Oscillator;

use std::fs::File;
use std::io::{BufWriter, Write};

/// Ground-state energy and first gap across a range of potential weights.
#[derive(Parser, Debug)]
#[command(author, version, about = "Oscillator spectrum sweep over the potential weight")]
struct Args {
    /// Basis dimension (at least 2)
    #[arg(long, default_value_t = 8)]
    n: usize,

    /// Smallest potential weight
    #[arg(long, default_value_t = 0.5)]
    a_min: f64,

    /// Largest potential weight
    #[arg(long, default_value_t = 2.0)]
    a_max: f64,

    /// Number of sweep steps
    #[arg(long, default_value_t = 50)]
    steps: usize,

    /// Output CSV path
    #[arg(long, default_value = "potential_sweep.csv")]
    out: String,
}

fn main() {
    let args = Args::parse();

    if args.steps == 0 {
        eprintln!("steps must be > 0");
        std::process::exit(1);
    }
    if args.a_min > args.a_max {
        eprintln!("a_min must not exceed a_max");
        std::process::exit(1);
    }
    if args.n < oscillator::MIN_DIM {
        eprintln!("n must be at least {}", oscillator::MIN_DIM);
        std::process::exit(1);
    }

    // Each sweep point is an independent build + decompose.
    let rows: Result<Vec<(f64, f64, f64)>, String> = (0..=args.steps)
        .into_par_iter()
        .map(|i| {
            let t = i as f64 / args.steps as f64;
            let a = args.a_min + t * (args.a_max - args.a_min);
            sweep_point(args.n, a)
                .map(|(ground, gap)| (a, ground, gap))
                .map_err(|e| format!("a = {:.4}: {}", a, e))
        })
        .collect();

    let rows = match rows {
        Ok(rows) => rows,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };

    write_csv(&args.out, &rows);

    let mut best = rows[0];
    for row in &rows[1..] {
        if row.1 < best.1 {
            best = *row;
        }
    }
    println!(
        "Sweep: n = {}, {} points, min ground energy {:.6} at a = {:.4}",
        args.n,
        rows.len(),
        best.1,
        best.0
    );
}

fn sweep_point(n: usize, a: f64) -> Result<(f64, f64), String> {
    let osc = Oscillator::new(n, a).map_err(|e| e.to_string())?;
    let h = osc.hamiltonian().map_err(|e| e.to_string())?;

    let mut solver = Eigensolver::new(n).map_err(|e| e.to_string())?;
    solver
        .accept(&encode_row_major(&h))
        .map_err(|e| e.to_string())?;
    let d = solver.decompose().map_err(|e| e.to_string())?;

    let ground = d.eigenvalues[0];
    let gap = d.eigenvalues[1] - ground;
    Ok((ground, gap))
}

fn write_csv(path: &str, rows: &[(f64, f64, f64)]) {
    let file = File::create(path).expect("failed to create CSV file");
    let mut w = BufWriter::new(file);
    writeln!(w, "a,ground,gap").expect("failed to write header");
    for (a, ground, gap) in rows {
        writeln!(w, "{},{},{}", a, ground, gap).expect("failed to write row");
    }
}

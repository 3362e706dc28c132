use std::time::Instant;

use clap::Parser;
use coxeter_solver::coxeter::{self, Coxeter};
use coxeter_solver::solver::solve_tc;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Cli {
    /// Enumerate the fixed families (H4, E6, E7) back to back.
    Families,
    /// Sweep torus resolutions from 1 up to the given bound.
    Torus { max_res: u32 },
    /// Sweep hypercube dimensions from 2 up to the given bound.
    Hypercube { max_dim: usize },
}

fn run(family: u32, arg: i64, cox: &Coxeter) {
    let start = Instant::now();
    let cosets = solve_tc(cox, &[]);
    println!(
        "{:},{:},{:},{:},{:}",
        family,
        arg,
        cox.ngens(),
        start.elapsed().as_secs_f32(),
        cosets.len()
    );
}

fn main() {
    let cli = Cli::parse();
    match cli {
        Cli::Families => {
            run(1, -1, &coxeter::h4());
            run(2, -1, &coxeter::e6());
            run(3, -1, &coxeter::e7());
        }
        Cli::Torus { max_res } => {
            for res in 1..=max_res {
                run(0, res as i64, &coxeter::torus(res));
            }
        }
        Cli::Hypercube { max_dim } => {
            for dim in 2..=max_dim {
                run(5, dim as i64, &coxeter::hypercube(dim));
            }
        }
    }
}

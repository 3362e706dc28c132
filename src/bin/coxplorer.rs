use std::process::exit;
use std::time::Instant;

use clap::Parser;
use coxeter_solver::coxeter::{self, Coxeter};
use coxeter_solver::solver::solve_tc;

/// Enumerates the cosets of a Coxeter group by its trivial subgroup and
/// prints one line on stdout: `type,arg,ngens,seconds,order`.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Group family: 0 torus, 1 H4, 2 E6, 3 E7, 4 E8, 5 hypercube.
    family: u32,

    /// Torus resolution (family 0) or hypercube dimension (family 5).
    size: Option<u32>,
}

fn require_size(size: Option<u32>, what: &str) -> u32 {
    match size {
        Some(s) => s,
        None => {
            eprintln!("Must provide {:}!", what);
            exit(1);
        }
    }
}

fn group_from_args(cli: &Cli) -> (Coxeter, i64) {
    match cli.family {
        0 => {
            let res = require_size(cli.size, "a size for the torus");
            (coxeter::torus(res), res as i64)
        }
        1 => (coxeter::h4(), -1),
        2 => (coxeter::e6(), -1),
        3 => (coxeter::e7(), -1),
        4 => (coxeter::e8(), -1),
        5 => {
            let dim = require_size(cli.size, "a dimension for the hypercube");
            (coxeter::hypercube(dim as usize), dim as i64)
        }
        other => {
            eprintln!("{:} is not a valid group family!", other);
            exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let (cox, arg) = group_from_args(&cli);

    let start = Instant::now();
    let cosets = solve_tc(&cox, &[]);
    let elapsed = start.elapsed().as_secs_f32();

    println!(
        "{:},{:},{:},{:},{:}",
        cli.family,
        arg,
        cox.ngens(),
        elapsed,
        cosets.len()
    );
}

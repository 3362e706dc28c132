pub mod coset_table;
pub mod coxeter;
pub mod rel_table;
pub mod solver;

pub use coset_table::{Cos, CosetTable, UNDEFINED};
pub use coxeter::{Coxeter, Gen, Mult};
pub use solver::{solve_tc, TCSolver};

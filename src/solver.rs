use std::time::Instant;

use log::trace;
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

use crate::coset_table::{Cos, CosetTable, UNDEFINED};
use crate::coxeter::{Coxeter, Gen};
use crate::rel_table::{Deduction, RelTable};

const TRACE_STEP: usize = 40_000;

/// Todd-Coxeter driver. Owns the coset table and the per-relation scan
/// tables for the duration of a solve; the group description is borrowed.
/// `solve` consumes the driver and hands the closed table to the caller.
pub struct TCSolver<'a> {
    cox: &'a Coxeter,
    cosets: CosetTable,
    rel_tables: Vec<RelTable>,
    scan_hint: Cos,
}

impl<'a> TCSolver<'a> {
    /// Sets up the identity coset. `subgens` lists single generators fixing
    /// coset 0, which enumerates the cosets of the subgroup they generate;
    /// leave it empty to enumerate the whole group.
    pub fn new(cox: &'a Coxeter, subgens: &[Gen]) -> Self {
        let mut cosets = CosetTable::new(cox.ngens());
        let mut rel_tables: Vec<RelTable> = (0..cox.nrels())
            .map(|r| {
                let (gen0, gen1, word_len) = cox.relation(r);
                RelTable::new(gen0, gen1, word_len)
            })
            .collect();

        let identity = cosets.add_row();
        for rt in rel_tables.iter_mut() {
            rt.add_row(identity);
        }
        for &s in subgens {
            if s >= cox.ngens() {
                panic!(
                    "Subgroup generator {:} is out of range for {:} generators.",
                    s,
                    cox.ngens()
                );
            }
            cosets.set(identity, s, identity);
        }

        Self {
            cox,
            cosets,
            rel_tables,
            scan_hint: 0,
        }
    }

    /// Scans every relation until no scan can make further progress. Each
    /// relation owns its scan rows, so the tables scan in parallel against a
    /// shared read-only view of the coset table; the deductions they emit
    /// are conflict-free and get applied between passes, together with their
    /// mirror image (generators are involutions).
    fn learn(&mut self) {
        loop {
            let cosets = &self.cosets;
            let deductions: Vec<Deduction> = self
                .rel_tables
                .par_iter_mut()
                .flat_map(|rt| rt.scan(cosets))
                .collect();
            if deductions.is_empty() {
                break;
            }
            for d in deductions {
                self.cosets.set(d.coset, d.gen, d.result);
                self.cosets.set(d.result, d.gen, d.coset);
            }
        }
    }

    /// Fills the first undefined slot in row-major order with a brand new
    /// coset and opens its scan rows. Returns `false` once the table has no
    /// undefined slot, which is the only way the solve terminates.
    ///
    /// The search resumes at the row where the previous call found its slot,
    /// not one past it: that row may hold more undefined slots further
    /// right. Entries never revert to undefined, so the hint only moves
    /// forward.
    fn add_coset(&mut self) -> bool {
        let num_cosets = self.cosets.len() as Cos;
        let mut c = self.scan_hint;
        while c < num_cosets {
            for g in 0..self.cox.ngens() {
                if self.cosets.get(c, g) == UNDEFINED {
                    let new_coset = self.cosets.add_row();
                    for rt in self.rel_tables.iter_mut() {
                        rt.add_row(new_coset);
                    }
                    self.cosets.set(c, g, new_coset);
                    self.cosets.set(new_coset, g, c);
                    self.scan_hint = c;
                    return true;
                }
            }
            c += 1;
        }
        false
    }

    /// Alternates learning and defining until the table closes, then
    /// returns it. Runs forever on an infinite-index presentation; callers
    /// wanting a bound must impose it from outside.
    pub fn solve(mut self) -> CosetTable {
        let start = Instant::now();
        loop {
            self.learn();
            if !self.add_coset() {
                break;
            }
            if self.cosets.len() % TRACE_STEP == 0 {
                let live_rows: usize = self.rel_tables.iter().map(|rt| rt.num_rows()).sum();
                trace!(
                    "{:} cosets defined, {:} live scan rows, {:} seconds elapsed",
                    self.cosets.len(),
                    live_rows,
                    start.elapsed().as_secs_f64()
                );
            }
        }
        trace!(
            "table closed at {:} cosets in {:} seconds",
            self.cosets.len(),
            start.elapsed().as_secs_f64()
        );
        self.cosets
    }
}

/// Enumerates the cosets of the subgroup generated by `subgens` (the whole
/// group when empty) and returns the closed coset table.
pub fn solve_tc(cox: &Coxeter, subgens: &[Gen]) -> CosetTable {
    TCSolver::new(cox, subgens).solve()
}

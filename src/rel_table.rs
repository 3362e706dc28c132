use crate::coset_table::{Cos, CosetTable, UNDEFINED};
use crate::coxeter::Gen;

/// Position within a relator word.
pub type Ind = i32;

/// A table entry proved by a completed scan: `coset * gen = result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deduction {
    pub coset: Cos,
    pub gen: Gen,
    pub result: Cos,
}

/// Active scans of one relator `(a b)^m` through the coset table. Each scan
/// row tracks how far the alternating word has been walked forward from its
/// starting coset and backward from the same coset; when the two frontiers
/// meet, the one generator between them is forced and the row retires.
///
/// Rows live in parallel vectors (struct of arrays) with a `coset_poss`
/// back-index from a coset to its row slot, `-1` when it has none. The inner
/// scan loop reads one field of many rows, so the SoA layout keeps it on
/// contiguous memory.
#[derive(Debug, Clone)]
pub struct RelTable {
    gens: [Gen; 2],
    end_ind: Ind,
    coset_poss: Vec<i32>,
    init_cosets: Vec<Cos>,
    start_cosets: Vec<Cos>,
    end_cosets: Vec<Cos>,
    start_inds: Vec<Ind>,
    end_inds: Vec<Ind>,
}

impl RelTable {
    pub fn new(gen0: Gen, gen1: Gen, word_len: i32) -> Self {
        Self {
            gens: [gen0, gen1],
            end_ind: word_len - 1,
            coset_poss: Vec::new(),
            init_cosets: Vec::new(),
            start_cosets: Vec::new(),
            end_cosets: Vec::new(),
            start_inds: Vec::new(),
            end_inds: Vec::new(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.init_cosets.len()
    }

    /// Opens a scan row for a freshly defined coset. Cosets are allocated in
    /// order and every relation table hears about each one exactly once, so
    /// `new_coset` always extends `coset_poss` by one slot.
    pub fn add_row(&mut self, new_coset: Cos) {
        debug_assert_eq!(new_coset as usize, self.coset_poss.len());
        self.coset_poss.push(self.init_cosets.len() as i32);
        self.init_cosets.push(new_coset);
        self.start_cosets.push(new_coset);
        self.end_cosets.push(new_coset);
        self.start_inds.push(0);
        self.end_inds.push(self.end_ind);
    }

    /// O(1) removal: the last row is swapped into slot `idx` and the
    /// back-index is patched for both the moved and the removed row.
    pub fn rem_row(&mut self, idx: usize) {
        let last = self.init_cosets.len() - 1;
        self.coset_poss[self.init_cosets[last] as usize] = idx as i32;
        self.coset_poss[self.init_cosets[idx] as usize] = -1;
        self.init_cosets.swap_remove(idx);
        self.start_cosets.swap_remove(idx);
        self.end_cosets.swap_remove(idx);
        self.start_inds.swap_remove(idx);
        self.end_inds.swap_remove(idx);
    }

    /// One maximal pass over every active row against the current coset
    /// table. Frontiers advance as far as defined entries allow; rows whose
    /// frontiers meet retire and emit the forced entry as a `Deduction`.
    ///
    /// Whenever a scan steps onto a coset above its own starting coset, that
    /// coset's row in this relation is dropped: the relator is a palindrome,
    /// so the symmetric scan from the smaller coset subsumes it. This
    /// pruning stands in for general coincidence handling and must stay.
    pub fn scan(&mut self, cosets: &CosetTable) -> Vec<Deduction> {
        let mut deductions = Vec::new();
        let mut row = 0;
        while row < self.init_cosets.len() {
            let mut s_i = self.start_inds[row];
            let mut e_i = self.end_inds[row];
            let mut s_c = self.start_cosets[row];
            let mut e_c = self.end_cosets[row];
            let i_c = self.init_cosets[row];

            while s_i < e_i {
                let lookup = cosets.get(s_c, self.gens[(s_i & 1) as usize]);
                if lookup == UNDEFINED {
                    break;
                }
                s_i += 1;
                s_c = lookup;
                if s_c > i_c {
                    row = self.prune(s_c, row);
                }
            }
            self.start_inds[row] = s_i;
            self.start_cosets[row] = s_c;

            while s_i < e_i {
                let lookup = cosets.get(e_c, self.gens[(e_i & 1) as usize]);
                if lookup == UNDEFINED {
                    break;
                }
                e_i -= 1;
                e_c = lookup;
                if e_c > i_c {
                    row = self.prune(e_c, row);
                }
            }
            self.end_inds[row] = e_i;
            self.end_cosets[row] = e_c;

            if s_i == e_i {
                deductions.push(Deduction {
                    coset: s_c,
                    gen: self.gens[(s_i & 1) as usize],
                    result: e_c,
                });
                // Removal swaps another row into this slot; revisit it.
                self.rem_row(row);
            } else {
                row += 1;
            }
        }
        deductions
    }

    /// Drops `coset`'s row if it has one. The row being scanned can never be
    /// the victim (its scan only prunes cosets above its own `init`), but it
    /// can be the last row and get swapped into the vacated slot; the
    /// returned index tracks it there.
    fn prune(&mut self, coset: Cos, current_row: usize) -> usize {
        let idx = self.coset_poss[coset as usize];
        if idx < 0 {
            return current_row;
        }
        let last = self.init_cosets.len() - 1;
        self.rem_row(idx as usize);
        if current_row == last {
            idx as usize
        } else {
            current_row
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Deduction, RelTable};
    use crate::coset_table::CosetTable;

    fn table_with_rows(ngens: usize, rows: usize) -> CosetTable {
        let mut t = CosetTable::new(ngens);
        for _ in 0..rows {
            t.add_row();
        }
        t
    }

    #[test]
    fn test_back_index_survives_swap_remove() {
        let mut rt = RelTable::new(0, 1, 4);
        for c in 0..4 {
            rt.add_row(c);
        }
        rt.rem_row(1);
        assert_eq!(rt.num_rows(), 3);
        // Row for coset 3 moved into slot 1, coset 1 has no row anymore.
        assert_eq!(rt.coset_poss[3], 1);
        assert_eq!(rt.coset_poss[1], -1);
        assert_eq!(rt.init_cosets[1], 3);
        rt.rem_row(2);
        assert_eq!(rt.coset_poss[2], -1);
        assert_eq!(rt.num_rows(), 2);
    }

    #[test]
    fn test_scan_stops_at_undefined() {
        let mut cosets = table_with_rows(2, 2);
        cosets.set(0, 0, 1);
        cosets.set(1, 0, 0);
        let mut rt = RelTable::new(0, 1, 8);
        rt.add_row(0);
        rt.add_row(1);
        let deductions = rt.scan(&cosets);
        assert!(deductions.is_empty());
        // Coset 0's scan walked onto coset 1 and pruned its row.
        assert_eq!(rt.num_rows(), 1);
        assert_eq!(rt.init_cosets[0], 0);
        assert_eq!(rt.start_inds[0], 1);
        assert_eq!(rt.start_cosets[0], 1);
    }

    #[test]
    fn test_meeting_frontiers_emit_deduction() {
        // Relator (0 1)^2: with 0*g0 = 1, 0*g1 = 2 and 1*g1 = 3 known, the
        // scan from coset 0 leaves one gap and forces 3*g0 = 2.
        let mut cosets = table_with_rows(2, 4);
        cosets.set(0, 0, 1);
        cosets.set(1, 0, 0);
        cosets.set(0, 1, 2);
        cosets.set(2, 1, 0);
        cosets.set(1, 1, 3);
        cosets.set(3, 1, 1);
        let mut rt = RelTable::new(0, 1, 4);
        for c in 0..4 {
            rt.add_row(c);
        }
        let deductions = rt.scan(&cosets);
        assert_eq!(
            deductions,
            vec![Deduction {
                coset: 3,
                gen: 0,
                result: 2
            }]
        );
        // Scanning retired coset 0's row and pruned the rows it walked over.
        assert_eq!(rt.num_rows(), 0);
    }

    #[test]
    fn test_short_relator_closes_in_one_step() {
        // Word length 2 (multiplicity 1): knowing 0*g0 = 1 forces 1*g1 = 0.
        let mut cosets = table_with_rows(2, 2);
        cosets.set(0, 0, 1);
        cosets.set(1, 0, 0);
        let mut rt = RelTable::new(0, 1, 2);
        rt.add_row(0);
        rt.add_row(1);
        let deductions = rt.scan(&cosets);
        assert_eq!(
            deductions,
            vec![Deduction {
                coset: 1,
                gen: 1,
                result: 0
            }]
        );
    }
}

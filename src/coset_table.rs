use std::fmt::Display;

use crate::coxeter::Gen;

/// Coset index. Signed so the table can hold `UNDEFINED` in place.
pub type Cos = i32;

/// Sentinel for a table entry that has not been deduced or defined yet.
pub const UNDEFINED: Cos = -1;

/// Dense right-coset action table, row-major: row `c` column `g` holds the
/// coset `c * g`. Rows are only appended, never reordered, and entries only
/// move from `UNDEFINED` to a value, so coset indices are stable for the
/// lifetime of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosetTable {
    table: Vec<Cos>,
    ngens: usize,
    num_cosets: usize,
}

impl CosetTable {
    pub fn new(ngens: usize) -> Self {
        Self {
            table: Vec::new(),
            ngens,
            num_cosets: 0,
        }
    }

    pub fn ngens(&self) -> usize {
        self.ngens
    }

    /// Number of cosets defined so far. Once the solve has closed the table
    /// this is the index of the subgroup, i.e. the group order for the
    /// trivial subgroup.
    pub fn len(&self) -> usize {
        self.num_cosets
    }

    pub fn is_empty(&self) -> bool {
        self.num_cosets == 0
    }

    /// Appends a row of `UNDEFINED` entries and returns the new coset. The
    /// only way the coset count grows.
    pub fn add_row(&mut self) -> Cos {
        let new_coset = self.num_cosets as Cos;
        self.num_cosets += 1;
        self.table.resize(self.table.len() + self.ngens, UNDEFINED);
        new_coset
    }

    #[inline]
    pub fn get(&self, c: Cos, g: Gen) -> Cos {
        self.table[c as usize * self.ngens + g]
    }

    #[inline]
    pub fn set(&mut self, c: Cos, g: Gen, v: Cos) {
        self.table[c as usize * self.ngens + g] = v;
    }

    #[inline]
    pub fn is_defined(&self, c: Cos, g: Gen) -> bool {
        self.get(c, g) != UNDEFINED
    }
}

impl Display for CosetTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.num_cosets.to_string().len().max(2);
        for c in 0..self.num_cosets {
            write!(f, "{:>width$} |", c, width = width)?;
            for g in 0..self.ngens {
                write!(f, " {:>width$}", self.get(c as Cos, g), width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CosetTable, UNDEFINED};

    #[test]
    fn test_add_row_grows_by_one() {
        let mut t = CosetTable::new(3);
        assert!(t.is_empty());
        assert_eq!(t.add_row(), 0);
        assert_eq!(t.add_row(), 1);
        assert_eq!(t.len(), 2);
        for c in 0..2 {
            for g in 0..3 {
                assert_eq!(t.get(c, g), UNDEFINED);
            }
        }
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut t = CosetTable::new(2);
        t.add_row();
        t.add_row();
        t.set(0, 1, 1);
        t.set(1, 1, 0);
        assert_eq!(t.get(0, 1), 1);
        assert_eq!(t.get(1, 1), 0);
        assert!(t.is_defined(0, 1));
        assert!(!t.is_defined(0, 0));
    }

    #[test]
    fn test_display_lines_up() {
        let mut t = CosetTable::new(2);
        t.add_row();
        t.set(0, 0, 0);
        let rendered = format!("{:}", t);
        assert_eq!(rendered, " 0 |  0 -1\n");
    }
}

use std::fmt::Display;

/// Generator index. Every generator of a Coxeter presentation is an
/// involution, so relations are fully described by pair multiplicities.
pub type Gen = usize;

/// One off-diagonal Coxeter matrix entry: `(from * to)^multiplicity = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mult {
    pub from: Gen,
    pub to: Gen,
    pub multiplicity: u32,
}

impl Mult {
    pub fn new(from: Gen, to: Gen, multiplicity: u32) -> Self {
        Mult {
            from,
            to,
            multiplicity,
        }
    }
}

/// A Coxeter presentation flattened into one relation slot per unordered
/// generator pair. Slot `r` holds the pair `(gen0[r], gen1[r])` with
/// `gen0[r] < gen1[r]` and the relator word length `word_len[r] = 2 * m_ij`.
/// Slots are laid out with the outer loop over the smaller generator, so the
/// slot order is reproducible for a given input. Pairs without an explicit
/// entry commute (`m = 2`). Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coxeter {
    ngens: usize,
    gen0: Vec<Gen>,
    gen1: Vec<Gen>,
    word_len: Vec<i32>,
}

impl Coxeter {
    pub fn new(ngens: usize, mults: &[Mult]) -> Self {
        if ngens == 0 {
            panic!("A Coxeter group needs at least one generator.");
        }
        let mut pair_mult = vec![2_u32; ngens * ngens];
        for entry in mults {
            if entry.from >= ngens || entry.to >= ngens {
                panic!(
                    "Multiplicity ({:}, {:}) is out of range for {:} generators.",
                    entry.from, entry.to, ngens
                );
            }
            if entry.from == entry.to {
                panic!("Pair multiplicities are only defined for distinct generators.");
            }
            if entry.multiplicity == 0 {
                panic!("A zero multiplicity does not present a group.");
            }
            pair_mult[entry.from * ngens + entry.to] = entry.multiplicity;
            pair_mult[entry.to * ngens + entry.from] = entry.multiplicity;
        }

        let nrels = (ngens * (ngens - 1)) >> 1;
        let mut gen0 = Vec::with_capacity(nrels);
        let mut gen1 = Vec::with_capacity(nrels);
        let mut word_len = Vec::with_capacity(nrels);
        for i in 0..ngens {
            for j in (i + 1)..ngens {
                gen0.push(i);
                gen1.push(j);
                word_len.push((pair_mult[i * ngens + j] << 1) as i32);
            }
        }
        Self {
            ngens,
            gen0,
            gen1,
            word_len,
        }
    }

    pub fn ngens(&self) -> usize {
        self.ngens
    }

    pub fn nrels(&self) -> usize {
        self.gen0.len()
    }

    /// The generator pair and relator word length of slot `r`.
    pub fn relation(&self, r: usize) -> (Gen, Gen, i32) {
        (self.gen0[r], self.gen1[r], self.word_len[r])
    }
}

impl Display for Coxeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coxeter group on {:} generators:", self.ngens)?;
        for r in 0..self.nrels() {
            if self.word_len[r] != 4 {
                write!(
                    f,
                    " ({:} {:})^{:}",
                    self.gen0[r],
                    self.gen1[r],
                    self.word_len[r] >> 1
                )?;
            }
        }
        Ok(())
    }
}

/// Symmetries of a flat torus, order `4 * res^2`. At `res = 1` the two pairs
/// collapse and the group degenerates to the Klein four-group.
pub fn torus(res: u32) -> Coxeter {
    if res < 1 {
        panic!("Torus resolution must be positive.");
    }
    Coxeter::new(4, &[Mult::new(0, 1, res), Mult::new(2, 3, res)])
}

/// Hypercube symmetries B_dim, order `2^dim * dim!`.
pub fn hypercube(dim: usize) -> Coxeter {
    if dim < 2 {
        panic!("Hypercube symmetry needs dimension at least 2.");
    }
    let mut mults = vec![Mult::new(0, 1, 4)];
    for i in 2..dim {
        mults.push(Mult::new(i - 1, i, 3));
    }
    Coxeter::new(dim, &mults)
}

/// Order 14,400
pub fn h4() -> Coxeter {
    Coxeter::new(
        4,
        &[Mult::new(0, 1, 5), Mult::new(1, 2, 3), Mult::new(2, 3, 3)],
    )
}

/// Order 51,840
pub fn e6() -> Coxeter {
    Coxeter::new(
        6,
        &[
            Mult::new(0, 1, 3),
            Mult::new(1, 2, 3),
            Mult::new(2, 3, 3),
            Mult::new(2, 4, 3),
            Mult::new(4, 5, 3),
        ],
    )
}

/// Order 2,903,040
pub fn e7() -> Coxeter {
    Coxeter::new(
        7,
        &[
            Mult::new(0, 1, 3),
            Mult::new(1, 2, 3),
            Mult::new(2, 3, 3),
            Mult::new(2, 4, 3),
            Mult::new(4, 5, 3),
            Mult::new(5, 6, 3),
        ],
    )
}

/// Order 696,729,600
pub fn e8() -> Coxeter {
    Coxeter::new(
        8,
        &[
            Mult::new(0, 1, 3),
            Mult::new(1, 2, 3),
            Mult::new(2, 3, 3),
            Mult::new(2, 4, 3),
            Mult::new(4, 5, 3),
            Mult::new(5, 6, 3),
            Mult::new(6, 7, 3),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::{e6, e8, hypercube, torus, Coxeter, Mult};

    #[test]
    fn test_slot_order_is_row_major() {
        let cox = Coxeter::new(4, &[Mult::new(0, 1, 5), Mult::new(2, 3, 3)]);
        assert_eq!(cox.nrels(), 6);
        let expected = [
            (0, 1, 10),
            (0, 2, 4),
            (0, 3, 4),
            (1, 2, 4),
            (1, 3, 4),
            (2, 3, 6),
        ];
        for (r, want) in expected.iter().enumerate() {
            assert_eq!(cox.relation(r), *want);
        }
    }

    #[test]
    fn test_unlisted_pairs_commute() {
        let cox = Coxeter::new(3, &[]);
        for r in 0..cox.nrels() {
            let (_, _, len) = cox.relation(r);
            assert_eq!(len, 4);
        }
    }

    #[test]
    fn test_later_entries_overwrite() {
        let cox = Coxeter::new(2, &[Mult::new(0, 1, 3), Mult::new(1, 0, 7)]);
        assert_eq!(cox.relation(0), (0, 1, 14));
    }

    #[test]
    fn test_families_have_expected_shape() {
        assert_eq!(torus(3).nrels(), 6);
        assert_eq!(hypercube(5).ngens(), 5);
        assert_eq!(e6().nrels(), 15);
        assert_eq!(e8().ngens(), 8);
        let cox = hypercube(4);
        assert_eq!(cox.relation(0), (0, 1, 8));
        assert_eq!(cox.relation(3), (1, 2, 6));
        assert_eq!(cox.relation(5), (2, 3, 6));
    }

    #[test]
    #[should_panic]
    fn test_zero_multiplicity_rejected() {
        Coxeter::new(2, &[Mult::new(0, 1, 0)]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_pair_rejected() {
        Coxeter::new(2, &[Mult::new(0, 2, 3)]);
    }
}

//! Minimum-cost global alignment of two ACGT sequences under a fixed
//! substitution matrix and a linear gap cost.
//!
//! Two strategies are exposed. [`align_full`] fills the classic
//! (m+1)x(n+1) dynamic-programming table and walks it back, paying O(mn)
//! memory for the privilege. [`align_linear`] is Hirschberg's divide and
//! conquer: the same optimal cost, an O(m+n) memory footprint, roughly
//! twice the arithmetic. Both are deterministic; they agree on cost on
//! every input, and on the alignment itself wherever tie-breaking leaves
//! no slack.
pub mod cost;
mod full;
pub mod gen_seq;
mod hirschberg;
pub mod input;
mod sweep;

use cost::CostModel;
use cost::GAP;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlignError {
    /// A sequence contains a byte outside the ACGT alphabet.
    #[error("unsupported symbol {0:?}")]
    UnsupportedSymbol(char),
    /// Traceback reached a cell no recurrence term explains. This is a
    /// bug in the solver, not a property of the input.
    #[error("traceback stuck at cell ({i},{j})")]
    InvalidTraceback { i: usize, j: usize },
}

/// A global alignment: two equal-length gap-marked sequences and the
/// total cost. Stripping `b'_'` from `xs` (resp. `ys`) recovers the first
/// (resp. second) input exactly; no column has gaps on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub xs: Vec<u8>,
    pub ys: Vec<u8>,
    pub cost: u32,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.xs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
    fn concat(mut self, other: Alignment) -> Alignment {
        self.xs.extend(other.xs);
        self.ys.extend(other.ys);
        self.cost += other.cost;
        self
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker: Vec<u8> = self
            .xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| {
                if x == GAP || y == GAP {
                    b' '
                } else if x == y {
                    b'|'
                } else {
                    b'X'
                }
            })
            .collect();
        writeln!(f, "{}", String::from_utf8_lossy(&self.xs))?;
        writeln!(f, "{}", String::from_utf8_lossy(&marker))?;
        write!(f, "{}", String::from_utf8_lossy(&self.ys))
    }
}

/// Align by the full DP table, O(mn) time and space.
pub fn align_full(xs: &[u8], ys: &[u8], model: &CostModel) -> Result<Alignment, AlignError> {
    let xs = model.encode(xs)?;
    let ys = model.encode(ys)?;
    full::align(&xs, &ys, model)
}

/// Align by divide and conquer, O(mn) time and O(m+n) auxiliary space.
pub fn align_linear(xs: &[u8], ys: &[u8], model: &CostModel) -> Result<Alignment, AlignError> {
    let xs = model.encode(xs)?;
    let ys = model.encode(ys)?;
    hirschberg::align(&xs, &ys, model)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use rayon::prelude::*;
    const SEED: u64 = 83911;

    fn strip(seq: &[u8]) -> Vec<u8> {
        seq.iter().filter(|&&b| b != GAP).copied().collect()
    }
    // Recompute the cost column by column under the model.
    fn column_cost(aln: &Alignment, model: &CostModel) -> u32 {
        aln.xs
            .iter()
            .zip(aln.ys.iter())
            .map(|(&x, &y)| {
                assert!(x != GAP || y != GAP, "both-gap column");
                if x == GAP || y == GAP {
                    model.gap()
                } else {
                    model.substitution(x, y).unwrap()
                }
            })
            .sum()
    }
    fn validate(aln: &Alignment, xs: &[u8], ys: &[u8], model: &CostModel) {
        assert_eq!(aln.len(), aln.xs.len());
        assert_eq!(aln.len(), aln.ys.len());
        assert_eq!(strip(&aln.xs), xs.to_vec());
        assert_eq!(strip(&aln.ys), ys.to_vec());
        assert_eq!(column_cost(aln, model), aln.cost);
    }

    #[test]
    fn full_vs_linear_random() {
        let model = CostModel::default();
        (0..100u64).into_par_iter().for_each(|seed| {
            let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED + seed);
            let xslen = rng.gen::<usize>() % 120;
            let xs = gen_seq::generate_seq(&mut rng, xslen);
            let yslen = rng.gen::<usize>() % 120;
            let ys = gen_seq::generate_seq(&mut rng, yslen);
            let full = align_full(&xs, &ys, &model).unwrap();
            let linear = align_linear(&xs, &ys, &model).unwrap();
            eprintln!("F:{}, L:{}", full.cost, linear.cost);
            assert_eq!(full.cost, linear.cost);
            validate(&full, &xs, &ys, &model);
            validate(&linear, &xs, &ys, &model);
        });
    }
    #[test]
    fn full_vs_linear_mutated() {
        // Related pairs exercise long match runs and scattered indels,
        // where a misplaced split column would show up immediately.
        let model = CostModel::default();
        (0..30u64).into_par_iter().for_each(|seed| {
            let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED + seed);
            let xslen = 300 + rng.gen::<usize>() % 200;
            let xs = gen_seq::generate_seq(&mut rng, xslen);
            let ys = gen_seq::introduce_randomness(&xs, &mut rng, &gen_seq::PROFILE);
            let full = align_full(&xs, &ys, &model).unwrap();
            let linear = align_linear(&xs, &ys, &model).unwrap();
            assert_eq!(full.cost, linear.cost);
            validate(&full, &xs, &ys, &model);
            validate(&linear, &xs, &ys, &model);
        });
    }
    #[test]
    fn full_vs_linear_asymmetric_model() {
        // Nothing may assume the matrix is symmetric.
        let mut sub = [0; 16];
        for x in 0..4u8 {
            for y in 0..4u8 {
                if x != y {
                    sub[(x << 2 | y) as usize] = 10 * x as u32 + 25 * y as u32 + 7;
                }
            }
        }
        let model = CostModel::new(sub, 20);
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED);
        for _ in 0..30 {
            let xslen = rng.gen::<usize>() % 80;
            let xs = gen_seq::generate_seq(&mut rng, xslen);
            let yslen = rng.gen::<usize>() % 80;
            let ys = gen_seq::generate_seq(&mut rng, yslen);
            let full = align_full(&xs, &ys, &model).unwrap();
            let linear = align_linear(&xs, &ys, &model).unwrap();
            assert_eq!(full.cost, linear.cost);
            validate(&full, &xs, &ys, &model);
            validate(&linear, &xs, &ys, &model);
        }
    }
    #[test]
    fn self_alignment_is_free() {
        let model = CostModel::default();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED + 1);
        let xs = gen_seq::generate_seq(&mut rng, 500);
        for aln in &[
            align_full(&xs, &xs, &model).unwrap(),
            align_linear(&xs, &xs, &model).unwrap(),
        ] {
            assert_eq!(aln.cost, 0);
            assert_eq!(aln.xs, xs);
            assert_eq!(aln.ys, xs);
        }
    }
    #[test]
    fn empty_against_anything() {
        let model = CostModel::default();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED + 2);
        for len in &[0usize, 1, 17, 100] {
            let ys = gen_seq::generate_seq(&mut rng, *len);
            for aln in &[
                align_full(b"", &ys, &model).unwrap(),
                align_linear(b"", &ys, &model).unwrap(),
            ] {
                assert_eq!(aln.cost, *len as u32 * model.gap());
                assert_eq!(aln.len(), *len);
                assert_eq!(aln.is_empty(), *len == 0);
                assert_eq!(aln.xs, vec![GAP; *len]);
                assert_eq!(strip(&aln.ys), ys);
            }
        }
    }
    #[test]
    fn unsupported_symbols_are_rejected() {
        let model = CostModel::default();
        for result in &[
            align_full(b"ACNG", b"ACG", &model),
            align_linear(b"ACG", b"AC-G", &model),
        ] {
            assert!(matches!(result, Err(AlignError::UnsupportedSymbol(_))));
        }
    }
    #[test]
    fn display_marks_columns() {
        let model = CostModel::default();
        let aln = align_full(b"AA", b"AG", &model).unwrap();
        assert_eq!(format!("{}", aln), "AA\n|X\nAG");
        let aln = align_full(b"AC", b"A", &model).unwrap();
        assert_eq!(format!("{}", aln), "AC\n| \nA_");
    }
}

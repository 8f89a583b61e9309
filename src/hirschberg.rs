//! Linear-space global alignment by divide and conquer (Hirschberg).
//!
//! The first sequence is split at its midpoint; a forward sweep over the
//! left half and a reverse sweep over the right half locate the column of
//! the second sequence where an optimal path crosses the midpoint row.
//! Only the terminal one-row subproblems ever touch a full DP table, so
//! auxiliary memory stays O(m + n) while the cost is exactly the full
//! solver's optimum.
use crate::cost::{decode_base, CostModel, GAP};
use crate::full;
use crate::sweep::{last_row, Direction};
use crate::{AlignError, Alignment};

pub(crate) fn align(xs: &[u8], ys: &[u8], model: &CostModel) -> Result<Alignment, AlignError> {
    let (m, n) = (xs.len(), ys.len());
    if m == 0 {
        return Ok(Alignment {
            xs: vec![GAP; n],
            ys: ys.iter().map(|&y| decode_base(y)).collect(),
            cost: n as u32 * model.gap(),
        });
    }
    if n == 0 {
        return Ok(Alignment {
            xs: xs.iter().map(|&x| decode_base(x)).collect(),
            ys: vec![GAP; m],
            cost: m as u32 * model.gap(),
        });
    }
    if m == 1 || n == 1 {
        return full::align(xs, ys, model);
    }
    let mid = m / 2;
    // Scratch rows are scoped so the recursion below never holds them.
    let split = {
        let score_left = last_row(&xs[..mid], ys, model, Direction::Forward);
        let mut score_right = last_row(&xs[mid..], ys, model, Direction::Reverse);
        score_right.reverse();
        score_left
            .iter()
            .zip(score_right.iter())
            .map(|(l, r)| l + r)
            .enumerate()
            // On ties, min_by_key keeps the first, i.e. leftmost, column.
            .min_by_key(|&(_, cost)| cost)
            .map(|(k, _)| k)
            .unwrap()
    };
    let left = align(&xs[..mid], &ys[..split], model)?;
    let right = align(&xs[mid..], &ys[split..], model)?;
    Ok(left.concat(right))
}

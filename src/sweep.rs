//! Rolling-row cost sweep: the last row of the full DP table in O(n) space.
use crate::cost::CostModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Reverse,
}

/// Cost of aligning the whole of `xs` against every prefix of `ys`,
/// both read in `direction`. The returned row has length `ys.len() + 1`.
///
/// `Reverse` runs the identical recurrence on both sequences back-to-front,
/// so entry `j` of the result refers to the last `j` bases of `ys`; callers
/// wanting forward column order reverse the row themselves.
pub(crate) fn last_row(xs: &[u8], ys: &[u8], model: &CostModel, direction: Direction) -> Vec<u32> {
    let (m, n) = (xs.len(), ys.len());
    let gap = model.gap();
    let mut prev: Vec<u32> = (0..=n).map(|j| j as u32 * gap).collect();
    let mut curr = vec![0; n + 1];
    for i in 1..=m {
        curr[0] = i as u32 * gap;
        for j in 1..=n {
            let (x, y) = match direction {
                Direction::Forward => (xs[i - 1], ys[j - 1]),
                Direction::Reverse => (xs[m - i], ys[n - j]),
            };
            curr[j] = (prev[j - 1] + model.sub(x, y))
                .min(prev[j] + gap)
                .min(curr[j - 1] + gap);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev
}

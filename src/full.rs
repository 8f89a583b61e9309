//! Full-table global alignment. O(mn) time and, deliberately, O(mn) space:
//! this is the reference solver and the base case of the divide-and-conquer
//! driver, not something to call on chromosome-sized input.
use crate::cost::{decode_base, CostModel, GAP};
use crate::{AlignError, Alignment};

/// Align two encoded sequences, recovering the alignment by traceback.
///
/// Traceback compares exact integers against the three recurrence terms.
/// On ties the diagonal move wins, then the move consuming a base of `ys`,
/// then the move consuming a base of `xs`; the alignment is therefore
/// deterministic even when several optima exist.
pub(crate) fn align(xs: &[u8], ys: &[u8], model: &CostModel) -> Result<Alignment, AlignError> {
    let (m, n) = (xs.len(), ys.len());
    let gap = model.gap();
    let colnum = n + 1;
    let mut dp = vec![0; (m + 1) * colnum];
    for i in 0..=m {
        dp[i * colnum] = i as u32 * gap;
    }
    for (j, slot) in dp.iter_mut().enumerate().take(n + 1) {
        *slot = j as u32 * gap;
    }
    for i in 1..=m {
        for j in 1..=n {
            dp[i * colnum + j] = (dp[(i - 1) * colnum + j - 1] + model.sub(xs[i - 1], ys[j - 1]))
                .min(dp[(i - 1) * colnum + j] + gap)
                .min(dp[i * colnum + j - 1] + gap);
        }
    }
    let (mut i, mut j) = (m, n);
    let (mut xr, mut yr) = (vec![], vec![]);
    while 0 < i || 0 < j {
        let current = dp[i * colnum + j];
        if 0 < i
            && 0 < j
            && current == dp[(i - 1) * colnum + j - 1] + model.sub(xs[i - 1], ys[j - 1])
        {
            xr.push(decode_base(xs[i - 1]));
            yr.push(decode_base(ys[j - 1]));
            i -= 1;
            j -= 1;
        } else if 0 < j && current == dp[i * colnum + j - 1] + gap {
            xr.push(GAP);
            yr.push(decode_base(ys[j - 1]));
            j -= 1;
        } else if 0 < i && current == dp[(i - 1) * colnum + j] + gap {
            xr.push(decode_base(xs[i - 1]));
            yr.push(GAP);
            i -= 1;
        } else {
            // No recurrence term explains the stored minimum.
            return Err(AlignError::InvalidTraceback { i, j });
        }
    }
    xr.reverse();
    yr.reverse();
    Ok(Alignment {
        xs: xr,
        ys: yr,
        cost: dp[m * colnum + n],
    })
}

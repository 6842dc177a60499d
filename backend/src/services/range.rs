use tracing::debug;

use crate::error::CollatzResult;
use crate::models::{Leader, RangeBounds};
use crate::routes::number::NumberAnalysis;
use crate::routes::range::RangeData;
use crate::services::number::analyze_number;

/// Fold state for the five per-metric winners.
#[derive(Debug, Clone, Default)]
pub(crate) struct Leaders {
    pub iterations: Leader<usize>,
    pub max_value: Leader<u128>,
    pub shortcut: Leader<usize>,
    pub sum_values: Leader<f64>,
    pub grow_seq: Leader<usize>,
}

impl Leaders {
    /// Offer one analyzed number to every metric.
    pub fn observe(&mut self, analysis: &NumberAnalysis) {
        let n = analysis.number;
        self.iterations.offer(n, analysis.iterations);
        self.max_value.offer(n, analysis.max_value);
        self.shortcut.offer(n, analysis.shortcut_count);
        self.sum_values.offer(n, analysis.sum_values);
        self.grow_seq.offer(n, analysis.largest_grow_seq);
    }
}

/// Analyze every number in `[start, end]` and pick the per-metric winners.
///
/// Numbers are visited in ascending order and a winner is only replaced by a
/// strictly greater value, so ties go to the smallest number.
///
/// # Errors
///
/// Fails on an invalid range, or with the first trajectory that overflows.
pub fn analyze_range(start: u64, end: u64) -> CollatzResult<RangeData> {
    let range = RangeBounds::new(start, end)?;

    let mut leaders = Leaders::default();
    let details = range
        .iter()
        .map(|n| {
            let analysis = analyze_number(n)?;
            leaders.observe(&analysis);
            Ok(analysis)
        })
        .collect::<CollatzResult<Vec<_>>>()?;

    debug!(start, end, count = details.len(), "analyzed range");

    Ok(RangeData {
        range: range.as_pair(),
        max_iterations: leaders.iterations.into(),
        max_value: leaders.max_value.into(),
        max_shortcut: leaders.shortcut.into(),
        max_sum_values: leaders.sum_values.into(),
        max_grow_seq: leaders.grow_seq.into(),
        details,
    })
}

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::CollatzResult;
use crate::models::RangeBounds;
use crate::routes::sixn::{SixNData, SixNRange, SixNStats, SIX_N_TYPE};
use crate::services::number::analyze_number;
use crate::services::range::Leaders;

/// Whether `n` is congruent to 1 or 5 modulo 6.
pub fn is_six_n(n: u64) -> bool {
    matches!(n % 6, 1 | 5)
}

/// Round to two decimal places, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Analyze the 6n±1 numbers of `[start, end]`.
///
/// Winners follow the same scan-order rule as [`analyze_range`]. An empty
/// filtered set yields zero counts and no average, which is written as `0`.
///
/// [`analyze_range`]: crate::services::range::analyze_range
pub fn analyze_six_n(start: u64, end: u64) -> CollatzResult<SixNRange> {
    let range = RangeBounds::new(start, end)?;

    let mut leaders = Leaders::default();
    let mut closure_distribution: BTreeMap<u128, usize> = BTreeMap::new();
    let mut total_iterations = 0usize;
    let mut numbers = Vec::new();

    for n in range.iter().filter(|&n| is_six_n(n)) {
        let analysis = analyze_number(n)?;
        leaders.observe(&analysis);
        *closure_distribution.entry(analysis.closure_point).or_insert(0) += 1;
        total_iterations += analysis.iterations;
        numbers.push(SixNData {
            number: n,
            kind: SIX_N_TYPE.to_string(),
            iterations: analysis.iterations,
            max_value: analysis.max_value,
            closure_point: analysis.closure_point,
        });
    }

    let avg_iterations = if numbers.is_empty() {
        None
    } else {
        Some(round2(total_iterations as f64 / numbers.len() as f64))
    };

    debug!(start, end, count = numbers.len(), "analyzed 6n±1 range");

    let stats = SixNStats {
        total_numbers: numbers.len(),
        avg_iterations,
        max_iterations: leaders.iterations.value,
        max_iterations_number: leaders.iterations.number,
        max_value: leaders.max_value.value,
        max_value_number: leaders.max_value.number,
        max_shortcut: leaders.shortcut.value,
        max_shortcut_number: leaders.shortcut.number,
        max_sum: leaders.sum_values.value,
        max_sum_number: leaders.sum_values.number,
        max_grow_seq: leaders.grow_seq.value,
        max_grow_seq_number: leaders.grow_seq.number,
        closure_distribution,
    };

    Ok(SixNRange {
        range: range.as_pair(),
        numbers,
        stats,
    })
}

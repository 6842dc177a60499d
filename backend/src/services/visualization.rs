use tracing::debug;

use crate::error::CollatzResult;
use crate::routes::visualization::{VisualizationData, VisualizationItem};
use crate::services::range::analyze_range;

/// Split a trajectory into its leading odd run and the even value ending it.
///
/// `div_count` is the number of halvings that take `final_even` to an odd
/// value.
pub fn odd_chain(n: u64, sequence: &[u128]) -> VisualizationItem {
    let multiply_chain: Vec<u128> = sequence
        .iter()
        .copied()
        .take_while(|v| v % 2 == 1)
        .collect();

    let final_even = sequence.get(multiply_chain.len()).copied();
    // Trajectory values are positive, so the trailing zero count is exactly
    // the number of halvings.
    let div_count = final_even.map(|v| v.trailing_zeros());

    VisualizationItem {
        n,
        times_stayed_odd: multiply_chain.len().saturating_sub(1),
        multiply_chain,
        final_even,
        div_count,
    }
}

/// Build the odd-run breakdown for every odd number in `[start, end]`.
pub fn build_visualization(start: u64, end: u64) -> CollatzResult<VisualizationData> {
    let range_data = analyze_range(start, end)?;

    let visualization_data: Vec<VisualizationItem> = range_data
        .details
        .iter()
        .filter(|d| d.number % 2 == 1)
        .map(|d| odd_chain(d.number, &d.sequence))
        .collect();

    debug!(
        start,
        end,
        items = visualization_data.len(),
        "built visualization data"
    );

    Ok(VisualizationData {
        range: range_data.range,
        visualization_data,
    })
}

use tracing::debug;

use crate::algorithms::compute_trajectory;
use crate::error::CollatzResult;
use crate::routes::number::NumberAnalysis;

/// Analyze a single starting number.
pub fn analyze_number(n: u64) -> CollatzResult<NumberAnalysis> {
    let analysis = NumberAnalysis::from(compute_trajectory(n)?);
    debug!(
        number = n,
        iterations = analysis.iterations,
        closure_point = analysis.closure_point,
        "analyzed number"
    );
    Ok(analysis)
}

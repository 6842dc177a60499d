use serde::{Deserialize, Serialize};

// =========================================================
// Visualization types + route
// =========================================================

/// Odd-run breakdown of one odd starting number.
///
/// `final_even` and `div_count` are `None` when the trajectory never leaves
/// the odd run, which only happens for `n = 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationItem {
    pub n: u64,
    pub multiply_chain: Vec<u128>,
    pub final_even: Option<u128>,
    pub div_count: Option<u32>,
    pub times_stayed_odd: usize,
}

/// Visualization payload for a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationData {
    pub range: [u64; 2],
    pub visualization_data: Vec<VisualizationItem>,
}

/// Route function name constant for visualization data
pub const GET_VISUALIZATION_DATA: &str = "get_visualization_data";

/// Path served by the visualization route
pub const VISUALIZATION_PATH: &str = "/collatz/visualization/{start}/{end}";

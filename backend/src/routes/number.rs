use serde::{Deserialize, Serialize};

use crate::models::Trajectory;

// =========================================================
// Single number types + route
// =========================================================

/// Trajectory of one number together with the number itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberAnalysis {
    pub number: u64,
    pub iterations: usize,
    pub max_value: u128,
    pub shortcut_count: usize,
    pub sum_values: f64,
    pub largest_grow_seq: usize,
    pub sequence: Vec<u128>,
    pub binary_sequence: Vec<String>,
    pub closure_point: u128,
}

impl From<Trajectory> for NumberAnalysis {
    fn from(t: Trajectory) -> Self {
        Self {
            number: t.start(),
            iterations: t.iterations,
            max_value: t.max_value,
            shortcut_count: t.shortcut_count,
            sum_values: t.sum_values,
            largest_grow_seq: t.largest_grow_seq,
            sequence: t.sequence,
            binary_sequence: t.binary_sequence,
            closure_point: t.closure_point,
        }
    }
}

/// Route function name constant for single number analysis
pub const GET_COLLATZ_NUMBER: &str = "get_collatz_number";

/// Path served by the single number route
pub const COLLATZ_NUMBER_PATH: &str = "/collatz/{number}";

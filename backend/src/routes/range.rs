use serde::{Deserialize, Serialize};

use super::number::NumberAnalysis;
use crate::models::Leader;

// =========================================================
// Range types + route
// =========================================================

/// Earliest number with the most iterations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxIterations {
    pub number: u64,
    pub iterations: usize,
}

/// Earliest number with the highest peak value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxValue {
    pub number: u64,
    pub value: u128,
}

/// Earliest number with the most odd steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxShortcut {
    pub number: u64,
    pub count: usize,
}

/// Earliest number with the largest reciprocal sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxSumValues {
    pub number: u64,
    pub sum: f64,
}

/// Earliest number with the longest grow-run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxGrowSeq {
    pub number: u64,
    pub value: usize,
}

impl From<Leader<usize>> for MaxIterations {
    fn from(l: Leader<usize>) -> Self {
        Self {
            number: l.number,
            iterations: l.value,
        }
    }
}

impl From<Leader<u128>> for MaxValue {
    fn from(l: Leader<u128>) -> Self {
        Self {
            number: l.number,
            value: l.value,
        }
    }
}

impl From<Leader<usize>> for MaxShortcut {
    fn from(l: Leader<usize>) -> Self {
        Self {
            number: l.number,
            count: l.value,
        }
    }
}

impl From<Leader<f64>> for MaxSumValues {
    fn from(l: Leader<f64>) -> Self {
        Self {
            number: l.number,
            sum: l.value,
        }
    }
}

impl From<Leader<usize>> for MaxGrowSeq {
    fn from(l: Leader<usize>) -> Self {
        Self {
            number: l.number,
            value: l.value,
        }
    }
}

/// Complete range analysis: per-number details and the five winners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeData {
    pub range: [u64; 2],
    pub max_iterations: MaxIterations,
    pub max_value: MaxValue,
    pub max_shortcut: MaxShortcut,
    pub max_sum_values: MaxSumValues,
    pub max_grow_seq: MaxGrowSeq,
    pub details: Vec<NumberAnalysis>,
}

/// Route function name constant for range analysis
pub const GET_COLLATZ_RANGE: &str = "get_collatz_range";

/// Path served by the range route
pub const COLLATZ_RANGE_PATH: &str = "/collatz/range/{start}/{end}";

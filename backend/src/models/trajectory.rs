//! Domain records shared by the kernel and the aggregators.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{CollatzError, CollatzResult};

/// Full trajectory of one starting integer under the halved odd step
/// `n -> (3n + 1) / 2`.
///
/// # Fields
///
/// * `sequence` - Visited values, starting at the input and ending at 1
/// * `binary_sequence` - Base-2 digits of each value in `sequence`
/// * `iterations` - Number of steps taken (`sequence.len() - 1`)
/// * `max_value` - Largest value visited
/// * `shortcut_count` - Number of odd steps
/// * `sum_values` - Sum of `1 / n` over every pre-step value
/// * `largest_grow_seq` - Longest run of consecutive growing odd steps
/// * `closure_point` - First value after the start equal to 5 or a power of two
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub sequence: Vec<u128>,
    pub binary_sequence: Vec<String>,
    pub iterations: usize,
    pub max_value: u128,
    pub shortcut_count: usize,
    pub sum_values: f64,
    pub largest_grow_seq: usize,
    pub closure_point: u128,
}

impl Trajectory {
    /// The starting integer.
    pub fn start(&self) -> u64 {
        // The kernel only accepts u64 starts.
        self.sequence[0] as u64
    }
}

/// Running best for one metric while folding over a range.
///
/// A candidate replaces the current leader only when it is strictly greater,
/// so the earliest number reaching the maximum keeps the title. The fold
/// starts from `{number: 0, value: 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Leader<T> {
    pub number: u64,
    pub value: T,
}

impl<T: PartialOrd + Copy> Leader<T> {
    /// Offer a candidate; returns `true` if it took the lead.
    pub fn offer(&mut self, number: u64, value: T) -> bool {
        if value > self.value {
            self.number = number;
            self.value = value;
            true
        } else {
            false
        }
    }
}

/// Validated inclusive range of positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeBounds {
    start: u64,
    end: u64,
}

impl RangeBounds {
    /// Build a range, rejecting zero bounds and reversed ranges.
    pub fn new(start: u64, end: u64) -> CollatzResult<Self> {
        if start == 0 || start > end {
            return Err(CollatzError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of integers covered.
    pub fn span(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `[start, end]` as it appears on the wire.
    pub fn as_pair(&self) -> [u64; 2] {
        [self.start, self.end]
    }

    pub fn iter(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

//! Sequence kernel for the halved 3n+1 iteration.
//!
//! Each step maps an even value `n` to `n / 2` and an odd value to
//! `(3n + 1) / 2`. Since `3n + 1` is even for odd `n`, the odd step is exact.
//! Alongside the sequence the kernel tracks the per-trajectory statistics
//! used by the range aggregators.
//!
//! Starting numbers are `u64`; visited values are held in `u128`, since
//! trajectories climb far above their start (23 035 537 407 peaks above
//! `u64::MAX`).

use crate::error::{CollatzError, CollatzResult};
use crate::models::Trajectory;

/// Whether `value` marks the closure of a trajectory: 5 or a power of two.
pub fn is_closure_point(value: u128) -> bool {
    value == 5 || value.is_power_of_two()
}

/// Base-2 digits without prefix or leading zeros.
pub fn to_binary(value: u128) -> String {
    format!("{:b}", value)
}

/// One step of the iteration. Returns `None` if the odd step overflows.
pub fn next_value(value: u128) -> Option<u128> {
    if value % 2 == 0 {
        Some(value / 2)
    } else {
        // For odd n = 2k + 1, (3n + 1) / 2 == 3k + 2.
        (value / 2).checked_mul(3)?.checked_add(2)
    }
}

/// Compute the trajectory of `n` down to 1.
///
/// `n = 1` yields `[1]` with zero iterations and closure point 1.
///
/// # Errors
///
/// * [`CollatzError::NonPositive`] when `n == 0`
/// * [`CollatzError::Overflow`] when an odd step exceeds `u128::MAX`
pub fn compute_trajectory(n: u64) -> CollatzResult<Trajectory> {
    if n == 0 {
        return Err(CollatzError::NonPositive { value: n });
    }

    let first = u128::from(n);
    let mut sequence = vec![first];
    let mut binary_sequence = vec![to_binary(first)];
    let mut iterations = 0;
    let mut max_value = first;
    let mut shortcut_count = 0;
    let mut sum_values = 0.0;
    let mut largest_grow_seq = 0;
    let mut current_grow_seq = 0;
    let mut closure_point = None;

    let mut current = first;
    while current > 1 {
        sum_values += 1.0 / current as f64;

        let next = next_value(current).ok_or(CollatzError::Overflow {
            start: n,
            at: current,
        })?;

        if current % 2 == 0 {
            current_grow_seq = 0;
        } else {
            shortcut_count += 1;
            if next > current {
                current_grow_seq += 1;
            } else {
                current_grow_seq = 0;
            }
        }
        largest_grow_seq = largest_grow_seq.max(current_grow_seq);

        sequence.push(next);
        binary_sequence.push(to_binary(next));
        iterations += 1;
        max_value = max_value.max(next);

        if closure_point.is_none() && is_closure_point(next) {
            closure_point = Some(next);
        }

        current = next;
    }

    // Only reachable for n = 1: every other trajectory hits a power of two.
    let closure_point = closure_point.unwrap_or(current);

    Ok(Trajectory {
        sequence,
        binary_sequence,
        iterations,
        max_value,
        shortcut_count,
        sum_values,
        largest_grow_seq,
        closure_point,
    })
}

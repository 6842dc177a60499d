//! Service layer for trajectory analysis.
//!
//! Services wrap the kernel in [`crate::algorithms`] and fold its output into
//! the response records defined in [`crate::routes`]. Every call computes from
//! scratch; nothing is cached between calls.

pub mod number;

pub mod range;

pub mod sixn;

pub mod visualization;

pub use number::analyze_number;
pub use range::analyze_range;
pub use sixn::{analyze_six_n, is_six_n};
pub use visualization::{build_visualization, odd_chain};

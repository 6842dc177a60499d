//! Pure numeric kernels.

pub mod trajectory;

pub use trajectory::{compute_trajectory, is_closure_point, next_value, to_binary};

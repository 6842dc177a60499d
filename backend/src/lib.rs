//! # Collatz Rust Backend
//!
//! Trajectory statistics for the halved 3n+1 iteration, served over HTTP.
//!
//! For a single starting number the kernel produces the full trajectory down
//! to 1 along with its iteration count, peak value, odd-step count, reciprocal
//! sum, longest grow-run and closure point. The aggregators fold those
//! trajectories over inclusive ranges.
//!
//! ## Features
//!
//! - **Kernel**: trajectory generation and per-trajectory statistics
//! - **Range analysis**: per-metric winners over `[start, end]`
//! - **6n±1 analysis**: winners, mean iterations and closure-point distribution
//!   restricted to numbers congruent to 1 or 5 modulo 6
//! - **Visualization**: leading odd run of every odd trajectory
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`algorithms`]: the sequence kernel
//! - [`models`]: trajectory record and fold state
//! - [`services`]: range aggregation and derived views
//! - [`routes`]: serializable response types
//! - [`api`]: flat re-export of the response types
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! All operations are pure functions of their integer inputs; no state is
//! shared between calls.

pub mod algorithms;
pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{CollatzError, CollatzResult};

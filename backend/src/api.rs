//! Public API surface for the Rust backend.
//!
//! This file consolidates the response types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{Leader, RangeBounds, Trajectory};
pub use crate::routes::number::NumberAnalysis;
pub use crate::routes::range::MaxGrowSeq;
pub use crate::routes::range::MaxIterations;
pub use crate::routes::range::MaxShortcut;
pub use crate::routes::range::MaxSumValues;
pub use crate::routes::range::MaxValue;
pub use crate::routes::range::RangeData;
pub use crate::routes::sixn::SixNData;
pub use crate::routes::sixn::SixNRange;
pub use crate::routes::sixn::SixNStats;
pub use crate::routes::visualization::VisualizationData;
pub use crate::routes::visualization::VisualizationItem;

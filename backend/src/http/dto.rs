//! Data Transfer Objects for the HTTP API.
//!
//! Analysis payloads are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Single number
    NumberAnalysis,
    // Range
    MaxGrowSeq, MaxIterations, MaxShortcut, MaxSumValues, MaxValue, RangeData,
    // 6n±1
    SixNData, SixNRange, SixNStats,
    // Visualization
    VisualizationData, VisualizationItem,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version serving the API
    pub version: String,
}

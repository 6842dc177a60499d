use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

// =========================================================
// 6n±1 types + route
// =========================================================

/// Class label attached to every filtered number.
pub const SIX_N_TYPE: &str = "6n±1";

/// Abbreviated record for one number of the 6n±1 class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SixNData {
    pub number: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub iterations: usize,
    pub max_value: u128,
    pub closure_point: u128,
}

/// Writes an absent mean as the integer `0` and any mean as a float.
fn serialize_average<S>(average: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match average {
        Some(mean) => serializer.serialize_f64(*mean),
        None => serializer.serialize_u64(0),
    }
}

/// Reads back what [`serialize_average`] writes: the integer `0` is the
/// empty-set marker, floats are means.
fn deserialize_average<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrFloat {
        Int(u64),
        Float(f64),
    }

    match IntOrFloat::deserialize(deserializer)? {
        IntOrFloat::Int(0) => Ok(None),
        IntOrFloat::Int(i) => Ok(Some(i as f64)),
        IntOrFloat::Float(f) => Ok(Some(f)),
    }
}

/// Winners, mean iterations and closure distribution over the filtered set.
///
/// `avg_iterations` is `None` when no number of the range is 6n±1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SixNStats {
    pub total_numbers: usize,
    #[serde(
        serialize_with = "serialize_average",
        deserialize_with = "deserialize_average"
    )]
    pub avg_iterations: Option<f64>,
    pub max_iterations: usize,
    pub max_iterations_number: u64,
    pub max_value: u128,
    pub max_value_number: u64,
    pub max_shortcut: usize,
    pub max_shortcut_number: u64,
    pub max_sum: f64,
    pub max_sum_number: u64,
    pub max_grow_seq: usize,
    pub max_grow_seq_number: u64,
    /// Count of filtered numbers per closure point.
    pub closure_distribution: BTreeMap<u128, usize>,
}

/// 6n±1 restricted range analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SixNRange {
    pub range: [u64; 2],
    pub numbers: Vec<SixNData>,
    pub stats: SixNStats,
}

/// Route function name constant for the 6n±1 analysis
pub const GET_SIXN_ANALYSIS: &str = "get_sixn_analysis";

/// Path served by the 6n±1 route
pub const SIXN_ANALYSIS_PATH: &str = "/collatz/sixn/{start}/{end}";
